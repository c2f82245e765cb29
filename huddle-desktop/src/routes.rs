use dioxus::prelude::*;

use crate::desktop::Desktop;
use crate::pages::{GamesPage, Landing};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/games")]
    GamesPage {},
    #[route("/desktop")]
    Desktop {},
}
