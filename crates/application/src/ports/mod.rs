mod resinfo_acquirer;

pub use resinfo_acquirer::ResinfoAcquirer;
