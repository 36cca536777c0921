use http::{
    header::{AsHeaderName, IntoHeaderName, InvalidHeaderValue},
    HeaderMap, HeaderValue,
};

/// Shared header access for [super::Request] and [super::Response].
pub trait HeaderMapExt {
    fn headers(&self) -> &HeaderMap;

    fn headers_mut(&mut self) -> &mut HeaderMap;

    fn header<K: AsHeaderName>(&self, key: K) -> Option<&HeaderValue> {
        self.headers().get(key)
    }

    /// Insert a header, replacing any previous value under the same name.
    fn insert_header<K, V>(&mut self, key: K, value: V) -> Result<(), InvalidHeaderValue>
    where
        K: IntoHeaderName,
        V: TryInto<HeaderValue, Error = InvalidHeaderValue>,
    {
        self.headers_mut().insert(key, value.try_into()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use http::header;
    use pretty_assertions::assert_eq;

    use super::*;

    struct Headers(HeaderMap);

    impl HeaderMapExt for Headers {
        fn headers(&self) -> &HeaderMap {
            &self.0
        }

        fn headers_mut(&mut self) -> &mut HeaderMap {
            &mut self.0
        }
    }

    #[test]
    fn should_insert_and_read_header() {
        let mut headers = Headers(HeaderMap::new());
        headers.insert_header("x-app", "demo").unwrap();
        headers.insert_header(header::HOST, "localhost").unwrap();
        assert_eq!(headers.header("X-App").unwrap(), "demo");
        assert_eq!(headers.header(header::HOST).unwrap(), "localhost");
    }

    #[test]
    fn should_reject_invalid_header_value() {
        let mut headers = Headers(HeaderMap::new());
        assert!(headers.insert_header("x-app", "line\nbreak").is_err());
        assert!(headers.headers().is_empty());
    }
}
