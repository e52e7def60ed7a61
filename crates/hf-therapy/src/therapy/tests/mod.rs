mod common;
mod routing;
mod safety;
