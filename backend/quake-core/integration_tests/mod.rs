mod fetch;
mod helpers;
