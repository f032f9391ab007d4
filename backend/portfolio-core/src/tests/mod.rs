mod anchor;
mod config;
mod escape;
mod form;
