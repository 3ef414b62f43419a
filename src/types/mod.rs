pub(crate) mod record;
pub(crate) mod season;
pub(crate) mod stats;
pub(crate) mod timestamp;
pub(crate) mod verdict;
