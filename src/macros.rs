//! Code generation for options models and open string enumerations.

/// Generates fluent setters for optional fields of an options model.
///
/// Each listed field must be declared as `Option<T>`; the setter stores
/// `Some(value.into())` and returns the model.
macro_rules! option_setters {
    ($( $(#[$doc:meta])* $field:ident : $ty:ty ),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )*
    };
}

/// Generates per-call header setters for an options model with a
/// `headers: HashMap<String, String>` field.
macro_rules! header_setters {
    () => {
        /// Adds a header sent with this call only.
        pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
            self.headers.insert(name.into(), value.into());
            self
        }

        /// Replaces the headers sent with this call.
        pub fn headers(mut self, headers: std::collections::HashMap<String, String>) -> Self {
            self.headers = headers;
            self
        }
    };
}

/// Declares a string enumeration that keeps unknown members.
///
/// Decoding never fails on an unrecognised value; it is preserved in the
/// `Other` variant and serialized back unchanged.
macro_rules! open_string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
            /// A value this client does not know about
            Other(String),
        }

        impl $name {
            /// The wire representation.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $text, )*
                    $name::Other(value) => value.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $( $text => $name::$variant, )*
                    _ => $name::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Declares an options model with only per-call headers.
macro_rules! empty_options {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            /// Per-call header overrides
            pub headers: std::collections::HashMap<String, String>,
        }

        impl $name {
            /// Create options with no per-call headers.
            pub fn new() -> Self {
                Self::default()
            }

            header_setters!();
        }
    };
}

/// Declares an options model addressing one model by ID.
macro_rules! model_id_options {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            /// Model ID (required)
            pub model_id: Option<String>,
            /// Per-call header overrides
            pub headers: std::collections::HashMap<String, String>,
        }

        impl $name {
            /// Options addressing `model_id`.
            pub fn new(model_id: impl Into<String>) -> Self {
                Self {
                    model_id: Some(model_id.into()),
                    ..Self::default()
                }
            }

            option_setters! {
                /// Model ID.
                model_id: String,
            }

            header_setters!();

            /// Check required fields.
            pub fn validate(&self) -> crate::errors::NluResult<()> {
                crate::services::Validator::new()
                    .require_text("model_id", &self.model_id)
                    .finish()
            }
        }
    };
}

/// Declares an options model for a create or update call that uploads
/// training data as a multipart form.
///
/// The fields every such call shares are generated; `$field`s are extra
/// optional fields specific to the model kind.
macro_rules! training_options {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name {
            /// ISO 639-1 language code of the training data (required)
            pub language: Option<String>,
            /// Training data (required)
            pub training_data: Option<crate::types::TrainingData>,
            /// Model name
            pub name: Option<String>,
            /// Model description
            pub description: Option<String>,
            /// Model version
            pub model_version: Option<String>,
            /// Knowledge Studio workspace ID
            pub workspace_id: Option<String>,
            /// Description of this version
            pub version_description: Option<String>,
            $( $(#[$fmeta])* pub $field: Option<$ty>, )*
            /// Per-call header overrides
            pub headers: std::collections::HashMap<String, String>,
        }

        impl $name {
            option_setters! {
                /// Language of the training data.
                language: String,
                /// Training data.
                training_data: crate::types::TrainingData,
                /// Model name.
                name: String,
                /// Model description.
                description: String,
                /// Model version.
                model_version: String,
                /// Knowledge Studio workspace ID.
                workspace_id: String,
                /// Description of this version.
                version_description: String,
                $( $(#[$fmeta])* $field: $ty, )*
            }

            header_setters!();

            fn training_validator(&self) -> crate::services::Validator {
                crate::services::Validator::new()
                    .require_text("language", &self.language)
                    .require_training_data(&self.training_data)
            }

            /// Moves the shared fields into a new form, in wire order.
            fn take_training_form(
                &mut self,
                content_type: &str,
            ) -> crate::errors::NluResult<crate::transport::FormData> {
                let language = self.language.take().ok_or_else(|| {
                    crate::errors::NluError::validation(vec![
                        crate::errors::ValidationDetail::required("language"),
                    ])
                })?;
                let training_data = self.training_data.take().ok_or_else(|| {
                    crate::errors::NluError::validation(vec![
                        crate::errors::ValidationDetail::required("training_data"),
                    ])
                })?;

                Ok(crate::transport::FormData::new()
                    .text("language", language)
                    .file(
                        "training_data",
                        "training_data",
                        content_type,
                        training_data.into_part_data(),
                    )
                    .maybe_text("name", self.name.take())
                    .maybe_text("description", self.description.take())
                    .maybe_text("model_version", self.model_version.take())
                    .maybe_text("workspace_id", self.workspace_id.take())
                    .maybe_text("version_description", self.version_description.take()))
            }
        }
    };
}

/// Declares the record returned for a custom trained model.
///
/// Every model kind shares the same fields; `$field`s are extra fields
/// reported by one kind only. All fields are optional on the wire.
macro_rules! model_record {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            /// Model ID
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub model_id: Option<String>,
            /// Lifecycle status
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub status: Option<crate::types::ModelStatus>,
            /// ISO 639-1 language code
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub language: Option<String>,
            /// Model name
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub name: Option<String>,
            /// Model description
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub description: Option<String>,
            /// Model version
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub model_version: Option<String>,
            /// Knowledge Studio workspace ID
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub workspace_id: Option<String>,
            /// Version description
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub version_description: Option<String>,
            /// Features the model supports
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub features: Option<Vec<String>>,
            /// Training notices
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub notices: Option<Vec<crate::types::Notice>>,
            /// Caller metadata stored with the model
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub user_metadata: Option<serde_json::Value>,
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
            /// Creation time
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub created: Option<crate::types::Timestamp>,
            /// Last training time
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub last_trained: Option<crate::types::Timestamp>,
            /// Last deployment time
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub last_deployed: Option<crate::types::Timestamp>,
        }
    };
}
