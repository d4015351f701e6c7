use super::DatastoreTypeRecord;

/// A read response after the reader has checked its shape.
///
/// `data` is only populated when `success` is true.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadResponse {
    pub success: bool,
    pub data: Vec<DatastoreTypeRecord>,
    pub message: Option<String>,
}
