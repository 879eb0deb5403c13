pub mod dictle;
