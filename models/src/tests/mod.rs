mod form_state;
mod markers;
mod reveal;
