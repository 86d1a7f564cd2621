pub mod gh;
pub mod query;

pub use gh::GhClient;

use crate::errors::Result;

/// HTTP method of a REST call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A request body parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Sent verbatim as a string.
    Raw(String, String),
    /// Numbers and booleans are sent as JSON literals.
    Typed(String, String),
}

/// One REST call against the organization API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub endpoint: String,
    pub paginate: bool,
    pub fields: Vec<Field>,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            paginate: false,
            fields: Vec::new(),
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Post, endpoint)
    }

    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Put, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Delete, endpoint)
    }

    /// Follow every page of a list endpoint.
    pub fn paginated(mut self) -> Self {
        self.paginate = true;
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(Field::Raw(key.into(), value.into()));
        self
    }

    pub fn typed_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(Field::Typed(key.into(), value.into()));
        self
    }
}

/// An authenticated client for the REST API.
///
/// `send` returns the response body as received. Paginated requests return
/// the pages concatenated, one JSON document per page.
pub trait ApiClient {
    fn send(&self, request: &ApiRequest) -> Result<Vec<u8>>;
}
