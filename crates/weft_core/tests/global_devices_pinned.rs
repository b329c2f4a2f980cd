//! Reading the global device set before installing one pins the built-in set

use weft_core::device::{global, init_global};
use weft_core::{Devices, WeftError};

#[test]
fn test_init_after_read_is_rejected() {
    assert_eq!(global(), &Devices::builtin());

    let result = init_global(Devices::builtin());
    assert!(matches!(result, Err(WeftError::AlreadyInitialized)));
    assert_eq!(global().len(), 3);
}
