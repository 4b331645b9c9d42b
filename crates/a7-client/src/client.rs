//! The top-level A7 client.

use crate::config::A7Config;
use crate::error::A7Error;
use crate::resources::algo::AlgoClient;
use crate::resources::auction::AuctionClient;
use crate::resources::dataset::DatasetClient;
use crate::resources::eobi::EobiClient;
use crate::resources::insights::InsightsClient;
use crate::resources::mdp::MdpClient;
use crate::resources::orderbook::OrderBookClient;
use crate::resources::precalc::PrecalcClient;
use crate::resources::rdi::RdiClient;
use crate::resources::sd::SdClient;
use crate::transport::HttpTransport;

/// Client for the A7 analytics platform API.
///
/// The client owns one configured connection pool; all resource method
/// groups issue their calls through it. It is `Send + Sync` and may be
/// shared across tasks; the library itself never runs requests
/// concurrently or retries them.
///
/// # Example
///
/// ```no_run
/// use a7_client::A7Client;
///
/// # async fn run() -> Result<(), a7_client::A7Error> {
/// let client = A7Client::new("YOUR_A7_TOKEN")?;
/// let markets = client.rdi().markets().await?;
/// println!("{markets:?}");
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct A7Client {
    transport: HttpTransport,
}

impl A7Client {
    /// Create a client with production defaults.
    ///
    /// The token may carry the `Bearer ` prefix or not; either way every
    /// request goes out with a canonical `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built,
    /// e.g. when the token is not a valid header value.
    pub fn new(token: impl Into<String>) -> Result<Self, A7Error> {
        Self::with_config(A7Config::new(token))
    }

    /// Create a client from an explicit configuration.
    ///
    /// The NO_PROXY environment is consulted once, here; the resulting
    /// bypass decision and all other settings are fixed for the lifetime
    /// of the client.
    pub fn with_config(config: A7Config) -> Result<Self, A7Error> {
        Ok(Self {
            transport: HttpTransport::new(&config)?,
        })
    }

    /// Reference data for T7 markets (RDI v2).
    #[must_use]
    pub fn rdi(&self) -> RdiClient<'_> {
        RdiClient::new(&self.transport)
    }

    /// Reference data for CME markets (Security Details v2).
    #[must_use]
    pub fn sd(&self) -> SdClient<'_> {
        SdClient::new(&self.transport)
    }

    /// EOBI order-book message drill-down for T7 markets.
    #[must_use]
    pub fn eobi(&self) -> EobiClient<'_> {
        EobiClient::new(&self.transport)
    }

    /// MDP market data messages for CME markets.
    #[must_use]
    pub fn mdp(&self) -> MdpClient<'_> {
        MdpClient::new(&self.transport)
    }

    /// Constructed order books.
    #[must_use]
    pub fn orderbook(&self) -> OrderBookClient<'_> {
        OrderBookClient::new(&self.transport)
    }

    /// Auction data and simulations.
    #[must_use]
    pub fn auction(&self) -> AuctionClient<'_> {
        AuctionClient::new(&self.transport)
    }

    /// Algorithm execution and management.
    #[must_use]
    pub fn algo(&self) -> AlgoClient<'_> {
        AlgoClient::new(&self.transport)
    }

    /// Market data insights (pace of the roll, latency histograms).
    #[must_use]
    pub fn insights(&self) -> InsightsClient<'_> {
        InsightsClient::new(&self.transport)
    }

    /// Customer dataset management.
    #[must_use]
    pub fn dataset(&self) -> DatasetClient<'_> {
        DatasetClient::new(&self.transport)
    }

    /// Precalculation job management.
    #[must_use]
    pub fn precalc(&self) -> PrecalcClient<'_> {
        PrecalcClient::new(&self.transport)
    }

    /// Close the client and release pooled connections.
    ///
    /// Idempotent: closing an already-closed client is a no-op. Requests
    /// issued after close fail with [`A7Error::Connection`]. Dropping the
    /// client has the same effect as closing it.
    pub fn close(&self) {
        self.transport.close();
    }
}
