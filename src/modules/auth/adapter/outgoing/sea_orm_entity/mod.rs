pub mod blacklist_tokens;
