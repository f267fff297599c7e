pub mod coinbase;
pub mod transport;

pub use coinbase::CoinbaseProvider;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};
