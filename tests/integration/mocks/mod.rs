// Shared by several test binaries; each uses a subset
#![allow(dead_code, unused_imports)]

pub mod stark_mock;

pub use stark_mock::{
    calculation_response, endpoint_url, setup_stark_mock, setup_stark_status_mock,
    setup_stark_variant_mock, RUG_CALCULATION_PATH,
};
