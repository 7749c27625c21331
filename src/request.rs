use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named query parameters, forwarded to the server verbatim
pub type Params = Map<String, Value>;

/// The JSON body posted to the query endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest<'a> {
    pub script: &'a str,
    pub params: Params,
}

impl<'a> QueryRequest<'a> {
    pub fn new(script: &'a str, params: Option<Params>) -> Self {
        QueryRequest {
            script,
            params: params.unwrap_or_default(),
        }
    }
}
