use serde::Deserialize;
use tracing::trace;

/// One headword from the lookup service.
///
/// Only the fields the game reads are modeled; everything else in the
/// response (phonetics, licenses, source urls) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub word: String,

    #[serde(default)]
    pub phonetic: Option<String>,

    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

impl Entry {
    /// Definition texts across all meanings, in the order the service sent them.
    pub fn into_definitions(self) -> Vec<String> {
        self.meanings
            .into_iter()
            .flat_map(|meaning| meaning.definitions)
            .map(|definition| definition.definition)
            .collect()
    }
}

/// A part-of-speech grouping of definitions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default)]
    pub part_of_speech: Option<String>,

    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Definition {
    pub definition: String,

    #[serde(default)]
    pub example: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Body {
    Entries(Vec<serde_json::Value>),
    Other(serde_json::Value),
}

/// Picks the first entry out of a response body.
///
/// Only the first element is decoded as an [`Entry`], so whatever follows it
/// can't spoil it. Any json that isn't a list starting with an entry counts
/// as "no entry". Only a body that isn't json at all is an error.
pub(super) fn first_entry(body: &[u8]) -> Result<Option<Entry>, serde_json::Error> {
    let first = match serde_json::from_slice(body)? {
        Body::Entries(entries) => entries.into_iter().next(),
        Body::Other(value) => {
            trace!(%value, "response is not a list");
            None
        }
    };

    let entry = first.and_then(|value| match serde_json::from_value(value) {
        Ok(entry) => Some(entry),
        Err(err) => {
            trace!(%err, "first element is not an entry");
            None
        }
    });

    Ok(entry)
}
