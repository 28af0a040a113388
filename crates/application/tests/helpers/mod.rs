pub mod mock_acquirer;

pub use mock_acquirer::MockResinfoAcquirer;
