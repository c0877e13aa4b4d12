// Domain layer: capability traits the assertions are generic over, and the
// error expectation model shared by is_error/throws/rejects.

pub mod model;
pub mod ports;
