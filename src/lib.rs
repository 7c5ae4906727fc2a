pub mod patcher;
