pub(crate) mod client;
pub(crate) mod error;

#[cfg(test)]
pub(crate) mod fake_server;
