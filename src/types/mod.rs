//! Types shared across the Watson NLU services.

use crate::errors::NluResult;
use crate::transport::{ByteStream, PartData};
use bytes::Bytes;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;
use std::sync::Arc;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

open_string_enum! {
    /// Lifecycle status of a custom model.
    pub enum ModelStatus {
        /// Model creation has started
        Starting => "starting",
        /// The model is training
        Training => "training",
        /// The model is being deployed
        Deploying => "deploying",
        /// The model can be used for analysis
        Available => "available",
        /// Training or deployment failed
        Error => "error",
        /// The model has been deleted
        Deleted => "deleted",
    }
}

open_string_enum! {
    /// Universal part-of-speech tag of a token.
    pub enum PartOfSpeech {
        /// Adjective
        Adj => "ADJ",
        /// Adposition
        Adp => "ADP",
        /// Adverb
        Adv => "ADV",
        /// Auxiliary
        Aux => "AUX",
        /// Coordinating conjunction
        Cconj => "CCONJ",
        /// Determiner
        Det => "DET",
        /// Interjection
        Intj => "INTJ",
        /// Noun
        Noun => "NOUN",
        /// Numeral
        Num => "NUM",
        /// Particle
        Part => "PART",
        /// Pronoun
        Pron => "PRON",
        /// Proper noun
        Propn => "PROPN",
        /// Punctuation
        Punct => "PUNCT",
        /// Subordinating conjunction
        Sconj => "SCONJ",
        /// Symbol
        Sym => "SYM",
        /// Verb
        Verb => "VERB",
        /// Other
        X => "X",
    }
}

/// A service timestamp.
///
/// A value that does not parse is kept as [`Timestamp::Invalid`] so that the
/// rest of the response still decodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    /// A parsed instant
    Valid(DateTime<Utc>),
    /// The raw value and the reason it did not parse
    Invalid {
        /// Value as sent by the service
        raw: String,
        /// Parse failure
        error: String,
    },
}

impl Timestamp {
    /// Parse RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]` (UTC) or `YYYY-MM-DD`.
    pub fn parse(raw: &str) -> Self {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Timestamp::Valid(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Timestamp::Valid(Utc.from_utc_datetime(&naive));
        }
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => match date.and_hms_opt(0, 0, 0) {
                Some(naive) => Timestamp::Valid(Utc.from_utc_datetime(&naive)),
                None => Timestamp::invalid(raw, "date out of range"),
            },
            Err(e) => Timestamp::invalid(raw, e.to_string()),
        }
    }

    fn invalid(raw: &str, error: impl Into<String>) -> Self {
        Timestamp::Invalid {
            raw: raw.to_string(),
            error: error.into(),
        }
    }

    /// The parsed instant, if valid.
    pub fn value(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Valid(dt) => Some(*dt),
            Timestamp::Invalid { .. } => None,
        }
    }

    /// Whether the value parsed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Timestamp::Valid(_))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp::Valid(value)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Timestamp::Valid(dt) => {
                serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Timestamp::Invalid { raw, .. } => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Timestamp::parse(&raw))
    }
}

/// A service notice attached to a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    /// Notice text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of a model deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteModelResults {
    /// Identifier of the deleted model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<String>,
}

/// Training data uploaded when creating or updating a model.
///
/// In-memory data can be sent any number of times. Streamed data is handed
/// to the wire as it is read and can only be sent once.
pub enum TrainingData {
    /// In-memory payload
    Bytes(Bytes),
    /// Streamed payload
    Stream(ByteStream),
}

impl TrainingData {
    /// Stream the contents of a file.
    pub async fn from_file(path: impl AsRef<Path>) -> NluResult<Self> {
        let file = tokio::fs::File::open(path).await?;
        Ok(Self::from_reader(file))
    }

    /// Stream the contents of an async reader.
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + Sync + 'static,
    {
        TrainingData::Stream(Box::pin(ReaderStream::new(reader)))
    }

    /// Whether the payload is known to be empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, TrainingData::Bytes(bytes) if bytes.is_empty())
    }

    pub(crate) fn into_part_data(self) -> PartData {
        match self {
            TrainingData::Bytes(bytes) => PartData::Bytes(bytes),
            TrainingData::Stream(stream) => PartData::Stream(Arc::new(Mutex::new(Some(stream)))),
        }
    }
}

impl std::fmt::Debug for TrainingData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainingData::Bytes(bytes) => write!(f, "TrainingData::Bytes({} bytes)", bytes.len()),
            TrainingData::Stream(_) => write!(f, "TrainingData::Stream"),
        }
    }
}

impl From<Bytes> for TrainingData {
    fn from(value: Bytes) -> Self {
        TrainingData::Bytes(value)
    }
}

impl From<Vec<u8>> for TrainingData {
    fn from(value: Vec<u8>) -> Self {
        TrainingData::Bytes(Bytes::from(value))
    }
}

impl From<String> for TrainingData {
    fn from(value: String) -> Self {
        TrainingData::Bytes(Bytes::from(value))
    }
}

impl From<&'static str> for TrainingData {
    fn from(value: &'static str) -> Self {
        TrainingData::Bytes(Bytes::from_static(value.as_bytes()))
    }
}

impl From<ByteStream> for TrainingData {
    fn from(value: ByteStream) -> Self {
        TrainingData::Stream(value)
    }
}
