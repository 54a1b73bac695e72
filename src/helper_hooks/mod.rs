mod fetch_once;

pub mod prelude {
    pub use super::fetch_once::ViewState;
    pub mod helper_hooks {
        pub use super::super::fetch_once::use_fetch_once;
    }
}
