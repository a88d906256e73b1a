pub mod api;
pub mod logging;
pub mod mock;
pub mod vtex;

pub mod util {
    pub mod env;
}
