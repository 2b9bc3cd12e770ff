mod collection;
mod reading;

pub use collection::{LoaderConfig, collect_file_paths};
pub use reading::{LoadFailure, LoadedCorpus, load_corpus, load_file};

#[cfg(test)]
mod tests;
