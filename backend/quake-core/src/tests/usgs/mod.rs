mod parse;
mod query;
