pub use msh_core::{authorization, import, repositories, util};

pub mod entities {
    pub use msh_core::entities::*;
    #[cfg(test)]
    pub use msh_entities::builders::*;
}

pub mod usecases {
    pub use msh_core::usecases::*;
}

pub mod prelude {
    pub use super::{entities::*, repositories::*};
}
