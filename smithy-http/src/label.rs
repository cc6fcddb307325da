/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as Smithy
//! [httpLabel](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httplabel-trait)

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Everything except the RFC 3986 unreserved characters
pub(crate) const BASE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b':')
    .add(b',')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'@')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b';')
    .add(b'=')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'"')
    .add(b'^')
    .add(b'`')
    .add(b'\\');

const GREEDY: &AsciiSet = &BASE_SET.remove(b'/');

pub fn fmt_string<T: AsRef<str>>(t: T, greedy: bool) -> String {
    let uri_set = if greedy { GREEDY } else { BASE_SET };
    utf8_percent_encode(t.as_ref(), uri_set).to_string()
}

#[cfg(test)]
mod test {
    use crate::label::fmt_string;

    #[test]
    fn greedy_params() {
        assert_eq!(fmt_string("a/b", false), "a%2Fb");
        assert_eq!(fmt_string("a/b", true), "a/b");
    }

    #[test]
    fn reserved_characters_are_encoded() {
        assert_eq!(fmt_string("my thing:1", false), "my%20thing%3A1");
        assert_eq!(fmt_string("arn:aws:iot:*", false), "arn%3Aaws%3Aiot%3A%2A");
        assert_eq!(fmt_string("unreserved-._~", false), "unreserved-._~");
    }
}
