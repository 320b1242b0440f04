pub use turfbook_core::{gateways, repositories};

pub mod entities {
    pub use turfbook_core::entities::*;
}

pub mod usecases {
    pub use turfbook_core::usecases::*;
}

pub mod prelude {
    pub use super::{
        entities::{
            activity::*, availability::*, id::Id, payment::*, reservation::*, settings::*,
            slot::*, time::*, venue::*,
        },
        repositories::*,
    };
}
