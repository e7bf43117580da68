//! Request bodies: JSON payloads and multipart forms.

use crate::errors::{NluError, NluResult};
use bytes::Bytes;
use futures::stream::Stream;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;

/// Streamed upload payload.
pub type ByteStream = Pin<Box<dyn Stream<Item = std::io::Result<Bytes>> + Send + Sync>>;

/// Request body variants.
pub enum RequestBody {
    /// No body.
    Empty,
    /// Serialized JSON document.
    Json(Bytes),
    /// `multipart/form-data` body.
    Multipart(FormData),
}

impl std::fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestBody::Empty => write!(f, "Empty"),
            RequestBody::Json(bytes) => write!(f, "Json({} bytes)", bytes.len()),
            RequestBody::Multipart(form) => write!(f, "Multipart({:?})", form.field_names()),
        }
    }
}

/// Payload of one form part.
#[derive(Clone)]
pub enum PartData {
    /// Plain text value.
    Text(String),
    /// In-memory bytes.
    Bytes(Bytes),
    /// A stream that can be handed to the wire exactly once.
    Stream(Arc<Mutex<Option<ByteStream>>>),
}

impl std::fmt::Debug for PartData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartData::Text(text) => write!(f, "Text({:?})", text),
            PartData::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            PartData::Stream(_) => write!(f, "Stream"),
        }
    }
}

/// One named field of a multipart form.
#[derive(Debug, Clone)]
pub struct FormPart {
    /// Form field name
    pub name: String,
    /// File name advertised in `Content-Disposition`
    pub filename: Option<String>,
    /// Part content type
    pub content_type: Option<String>,
    /// Part payload
    pub data: PartData,
}

impl FormPart {
    /// Takes the payload stream out of a streamed part.
    ///
    /// Returns `None` for non-stream parts and for streams already consumed.
    pub fn take_stream(&self) -> Option<ByteStream> {
        match &self.data {
            PartData::Stream(slot) => slot.lock().take(),
            _ => None,
        }
    }
}

/// A `multipart/form-data` body built from named parts.
///
/// Parts are kept in insertion order. Rendering to a `reqwest` form happens
/// at send time so the same value can be sent again on retry unless one of
/// its parts is a stream.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    parts: Vec<FormPart>,
}

impl FormData {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plain text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            filename: None,
            content_type: None,
            data: PartData::Text(value.into()),
        });
        self
    }

    /// Adds a plain text field when a value is present.
    pub fn maybe_text(self, name: impl Into<String>, value: Option<String>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    /// Adds a text field with an explicit content type (e.g. a JSON object).
    pub fn typed_text(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            filename: None,
            content_type: Some(content_type.into()),
            data: PartData::Text(value.into()),
        });
        self
    }

    /// Adds a file field.
    pub fn file(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: PartData,
    ) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            filename: Some(filename.into()),
            content_type: Some(content_type.into()),
            data,
        });
        self
    }

    /// Returns the parts in insertion order.
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Returns the part with the given name.
    pub fn part(&self, name: &str) -> Option<&FormPart> {
        self.parts.iter().find(|p| p.name == name)
    }

    /// Returns the field names in insertion order.
    pub fn field_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }

    /// Whether every part can be rendered more than once.
    pub fn is_replayable(&self) -> bool {
        !self
            .parts
            .iter()
            .any(|p| matches!(p.data, PartData::Stream(_)))
    }

    /// Renders the form for `reqwest`, consuming any streamed parts.
    pub fn to_reqwest_form(&self) -> NluResult<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();

        for part in &self.parts {
            let mut wire_part = match &part.data {
                PartData::Text(text) => reqwest::multipart::Part::text(text.clone()),
                PartData::Bytes(bytes) => reqwest::multipart::Part::bytes(bytes.to_vec()),
                PartData::Stream(_) => {
                    let stream = part.take_stream().ok_or_else(|| NluError::Internal {
                        message: format!("form field '{}' stream was already consumed", part.name),
                    })?;
                    reqwest::multipart::Part::stream(reqwest::Body::wrap_stream(stream))
                }
            };

            if let Some(filename) = &part.filename {
                wire_part = wire_part.file_name(filename.clone());
            }

            if let Some(content_type) = &part.content_type {
                wire_part = wire_part.mime_str(content_type).map_err(|e| {
                    NluError::Validation {
                        message: format!("invalid content type '{}': {}", content_type, e),
                        details: Vec::new(),
                    }
                })?;
            }

            form = form.part(part.name.clone(), wire_part);
        }

        Ok(form)
    }
}
