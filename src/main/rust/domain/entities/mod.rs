mod request_ledger;

pub use request_ledger::{RateGuard, RequestLedger, MIN_REQUEST_SPACING};
