use std::{collections::VecDeque, fmt::Debug, slice};

use crate::{
    http::{Request, Response},
    response::ResponseProvider,
    Error, Result,
};

/// Declared kind of a handler parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// Next captured path argument.
    Arg,
    /// Next captured path argument, wrapped in a one-element list.
    Args,
    /// The inbound request.
    Request,
    /// The response supplied by the [ResponseProvider].
    Response,
    /// Any other object type. Never resolvable.
    Object(String),
}

impl Param {
    /// [Param::Object] named after the short type name of `O`.
    ///
    /// References, pointers, slices and tuples are named after their first
    /// named component; `&mut [a::B]` becomes `B`.
    pub fn object<O: ?Sized>() -> Self {
        let full = std::any::type_name::<O>();
        let mut name = full;
        loop {
            let trimmed = name
                .trim_start_matches(['&', '(', '[', '*', ' '])
                .trim_start_matches("mut ")
                .trim_start_matches("const ")
                .trim_start_matches("dyn ");
            if trimmed == name {
                break;
            }
            name = trimmed;
        }
        let name = name.split(['<', ',', ';', ')', ']']).next().unwrap_or(name);
        let name = name.rsplit("::").next().unwrap_or(name).trim();
        Self::Object(if name.is_empty() { full } else { name }.to_string())
    }
}

/// Resolved parameter value handed to a handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Text(String),
    List(Vec<String>),
    Request(&'a Request),
    Response(&'a Response),
}

/// Resolved parameters in declared order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arguments<'a>(Vec<Value<'a>>);

impl<'a> Arguments<'a> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value<'a>> {
        self.0.get(index)
    }

    pub fn text(&self, index: usize) -> Option<&str> {
        match self.0.get(index)? {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn list(&self, index: usize) -> Option<&[String]> {
        match self.0.get(index)? {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// First request-valued parameter.
    pub fn request(&self) -> Option<&'a Request> {
        self.0.iter().find_map(|value| match value {
            Value::Request(request) => Some(*request),
            _ => None,
        })
    }

    /// First response-valued parameter.
    pub fn response(&self) -> Option<&'a Response> {
        self.0.iter().find_map(|value| match value {
            Value::Response(response) => Some(*response),
            _ => None,
        })
    }

    pub fn iter(&self) -> slice::Iter<'_, Value<'a>> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for Arguments<'a> {
    type Item = Value<'a>;
    type IntoIter = std::vec::IntoIter<Value<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> FromIterator<Value<'a>> for Arguments<'a> {
    fn from_iter<I: IntoIterator<Item = Value<'a>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

type Callable<T> = dyn Fn(Arguments<'_>) -> T + Send + Sync;

/// A callable together with its declared parameter list.
pub struct Handler<T> {
    signature: Vec<Param>,
    callable: Box<Callable<T>>,
}

impl<T> Handler<T> {
    pub fn new<S, F>(signature: S, callable: F) -> Self
    where
        S: IntoIterator<Item = Param>,
        F: Fn(Arguments<'_>) -> T + Send + Sync + 'static,
    {
        Self {
            signature: signature.into_iter().collect(),
            callable: Box::new(callable),
        }
    }

    pub fn signature(&self) -> &[Param] {
        &self.signature
    }

    /// Bind every declared parameter, consuming path arguments front to back.
    pub fn resolve<'a>(
        &self,
        args: Vec<String>,
        request: &'a Request,
        provider: &'a ResponseProvider,
    ) -> Result<Arguments<'a>> {
        let available = args.len();
        let mut args = VecDeque::from(args);
        self.signature
            .iter()
            .enumerate()
            .map(|(position, param)| {
                let mut next = || {
                    args.pop_front().ok_or(Error::MissingArgument {
                        position,
                        available,
                    })
                };
                Ok(match param {
                    Param::Arg => Value::Text(next()?),
                    Param::Args => Value::List(vec![next()?]),
                    Param::Request => Value::Request(request),
                    Param::Response => Value::Response(provider.get(request)?),
                    Param::Object(name) => {
                        return Err(Error::UnresolvableParameter(name.clone()))
                    }
                })
            })
            .collect()
    }

    pub fn call(&self, arguments: Arguments<'_>) -> T {
        (self.callable)(arguments)
    }
}

impl<T> Debug for Handler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// What a route pattern is bound to.
#[derive(Debug)]
pub enum Target<T> {
    Handler(Handler<T>),
    /// A handler named by string, e.g. `"UserController::show"`. Not dispatchable.
    Reference(String),
}

impl<T> From<Handler<T>> for Target<T> {
    fn from(handler: Handler<T>) -> Self {
        Self::Handler(handler)
    }
}
