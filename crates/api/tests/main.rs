
mod handlers;
