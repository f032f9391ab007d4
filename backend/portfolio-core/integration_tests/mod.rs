mod helpers;
mod scroll;
mod site;
