//! Boolean field query - matches `true`/`false` in a field mapped as boolean

use crate::query::types::QueryBody;
use crate::Result;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanFieldQuery {
    pub value: bool,
    pub boost: Option<f64>,
    pub field: Option<String>,
}

impl BooleanFieldQuery {
    pub fn new(value: bool) -> Self {
        Self {
            value,
            boost: None,
            field: None,
        }
    }

    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn encode(&self) -> Result<Value> {
        let mut body = QueryBody::with("bool", self.value);
        body.common(self.boost, self.field.as_ref());
        body.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_boolean_field_query_false_is_emitted() {
        let query = BooleanFieldQuery::new(false).with_field("free_breakfast");
        assert_eq!(
            query.encode().unwrap(),
            json!({"bool": false, "field": "free_breakfast"})
        );
    }
}
