#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(feature = "schemas")]
#[macro_use]
extern crate schemars;

#[cfg(feature = "rocket")]
pub mod rocket;

#[cfg(feature = "okapi")]
pub mod okapi;

/// Result type with custom Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error information
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
#[derive(Debug, Clone)]
pub struct Error {
    /// Type of error and additional information
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub error_type: ErrorType,

    /// Where this error occurred
    pub location: String,
}

/// Possible error types
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
#[derive(Debug, Clone)]
pub enum ErrorType {
    // ? Event related errors
    UnknownEvent,
    UnknownActivity,
    SuggestionsDisabled,
    VotingDisabled,
    TooManyActivities {
        max: usize,
    },
    TooManySupports {
        max: usize,
    },
    TooManyTags {
        max: usize,
    },
    TooManyProposals {
        max: usize,
    },

    // ? General errors
    DatabaseError {
        operation: String,
        collection: String,
    },
    InternalError,
    InvalidOperation,
    InvalidProperty,
    NotFound,
    FailedValidation {
        error: String,
    },
}

impl ErrorType {
    /// Human readable description, written into response bodies
    pub fn message(&self) -> String {
        match self {
            ErrorType::UnknownEvent => "Event not found".to_string(),
            ErrorType::UnknownActivity => "Activity not found".to_string(),
            ErrorType::SuggestionsDisabled => {
                "Suggestions are not enabled for this event".to_string()
            }
            ErrorType::VotingDisabled => "Voting is not enabled for this activity".to_string(),
            ErrorType::TooManyActivities { max } => {
                format!("Too many activities, maximum is {max}")
            }
            ErrorType::TooManySupports { max } => {
                format!("Too many support options, maximum is {max}")
            }
            ErrorType::TooManyTags { max } => format!("Too many tags, maximum is {max}"),
            ErrorType::TooManyProposals { max } => {
                format!("Too many proposals, maximum is {max}")
            }
            ErrorType::DatabaseError {
                operation,
                collection,
            } => format!("Database error during {operation} on {collection}"),
            ErrorType::InternalError => "Internal server error".to_string(),
            ErrorType::InvalidOperation => "Invalid operation".to_string(),
            ErrorType::InvalidProperty => "Invalid property".to_string(),
            ErrorType::NotFound => "Not found".to_string(),
            ErrorType::FailedValidation { error } => error.clone(),
        }
    }
}

#[macro_export]
macro_rules! create_error {
    ( $error: ident $( $tt:tt )? ) => {
        $crate::Error {
            error_type: $crate::ErrorType::$error $( $tt )?,
            location: format!("{}:{}:{}", file!(), line!(), column!()),
        }
    };
}

#[macro_export]
macro_rules! create_database_error {
    ( $operation: expr, $collection: expr ) => {
        create_error!(DatabaseError {
            operation: $operation.to_string(),
            collection: $collection.to_string()
        })
    };
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! query {
    ( $self: ident, $type: ident, $collection: expr, $($rest:expr),+ ) => {
        Ok($self.$type($collection, $($rest),+).await.unwrap())
    };
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! query {
    ( $self: ident, $type: ident, $collection: expr, $($rest:expr),+ ) => {
        $self.$type($collection, $($rest),+).await
            .map_err(|_| create_database_error!(stringify!($type), $collection))
    };
}

#[cfg(test)]
mod tests {
    use crate::ErrorType;

    #[test]
    fn use_macro_to_construct_error() {
        let error = create_error!(UnknownEvent);
        assert!(matches!(error.error_type, ErrorType::UnknownEvent));
    }

    #[test]
    fn use_macro_to_construct_complex_error() {
        let error = create_error!(TooManyTags { max: 20 });
        assert!(matches!(
            error.error_type,
            ErrorType::TooManyTags { max: 20 }
        ));
    }

    #[test]
    fn error_messages_name_the_resource() {
        assert_eq!(ErrorType::UnknownEvent.message(), "Event not found");
        assert_eq!(
            ErrorType::TooManyProposals { max: 64 }.message(),
            "Too many proposals, maximum is 64"
        );
    }
}
