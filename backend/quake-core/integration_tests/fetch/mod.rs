mod http;
mod pipeline;
mod reporter;
