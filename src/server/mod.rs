pub mod acceptor;
pub mod listener;

pub use acceptor::{Acceptor, ShutdownHandle};
pub use listener::{bind_tcp, ListenerError};
