/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values into the query string as specified in
//! [httpQuery](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httpquery-trait)

use crate::label::BASE_SET;
use percent_encoding::utf8_percent_encode;

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), BASE_SET).to_string()
}

/// Incrementally builds a query string, skipping parameters that were not set
///
/// ```rust
/// use smithy_http::query::Writer;
/// let mut uri = String::from("/things");
/// let mut query = Writer::new(&mut uri);
/// query.push_kv("maxResults", &10.to_string());
/// query.push_opt("nextToken", None::<&str>);
/// query.push_kv("thingTypeName", "lamp post");
/// assert_eq!(uri, "/things?maxResults=10&thingTypeName=lamp%20post");
/// ```
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Writer { out, prefix: '?' }
    }

    pub fn push_kv(&mut self, k: &str, v: &str) {
        self.out.push(self.prefix);
        self.out.push_str(&fmt_string(k));
        self.out.push('=');
        self.out.push_str(&fmt_string(v));
        self.prefix = '&';
    }

    pub fn push_opt<V: AsRef<str>>(&mut self, k: &str, v: Option<V>) {
        if let Some(v) = v {
            self.push_kv(k, v.as_ref());
        }
    }
}

#[cfg(test)]
mod test {
    use crate::query::{fmt_string, Writer};

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=;,?").as_str(), "%26%3D%3B%2C%3F");
    }

    #[test]
    fn first_param_gets_question_mark() {
        let mut uri = String::from("/endpoint");
        let mut writer = Writer::new(&mut uri);
        writer.push_opt("skipped", None::<String>);
        writer.push_kv("endpointType", "iot:Data-ATS");
        assert_eq!(uri, "/endpoint?endpointType=iot%3AData-ATS");
    }
}
