//! Recording test doubles for the form's collaborators.

mod mock_analytics;
mod mock_notifier;
mod mock_sender;

#[allow(unused_imports)]
pub use mock_analytics::{AnalyticsCall, MockAnalytics};
#[allow(unused_imports)]
pub use mock_notifier::MockNotifier;
#[allow(unused_imports)]
pub use mock_sender::MockSender;
