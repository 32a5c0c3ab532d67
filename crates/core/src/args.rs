//! Job argument parsing.
//!
//! Arguments arrive on the command line as `key=value` tokens. They are
//! parsed once per invocation into a [`JobArgs`] mapping that is handed to
//! the job, and the raw tokens are kept so they can be mirrored into the
//! [`JOB_ARGS_ENV`] environment variable for the engine.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CoreError;

/// Environment variable that receives the raw argument tokens, space-joined.
pub const JOB_ARGS_ENV: &str = "JOBKIT_JOB_ARGS";

/// String-keyed, string-valued job arguments for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct JobArgs {
    values: BTreeMap<String, String>,
    #[serde(skip)]
    raw: Vec<String>,
}

impl JobArgs {
    /// Parse `key=value` tokens.
    ///
    /// Each token is split on its **first** `=`, so values may themselves
    /// contain `=`. Values may be empty; keys may not. A key that appears
    /// twice is rejected rather than silently overwritten.
    pub fn parse<I, S>(tokens: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = Self::default();

        for token in tokens {
            let token = token.as_ref();
            let (key, value) = match token.split_once('=') {
                Some((key, value)) if !key.is_empty() => (key, value),
                _ => {
                    return Err(CoreError::MalformedArgument {
                        token: token.to_string(),
                    })
                }
            };

            if args.values.contains_key(key) {
                return Err(CoreError::DuplicateArgument {
                    key: key.to_string(),
                });
            }

            args.values.insert(key.to_string(), value.to_string());
            args.raw.push(token.to_string());
        }

        Ok(args)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The tokens exactly as they were given, in command-line order.
    pub fn raw_tokens(&self) -> &[String] {
        &self.raw
    }

    /// Value written to [`JOB_ARGS_ENV`]: raw tokens joined by single spaces,
    /// or the empty string when there are none.
    pub fn env_value(&self) -> String {
        self.raw.join(" ")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
