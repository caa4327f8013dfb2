mod area;
mod codec;
pub mod constants;
mod encoder;

pub use area::CodeArea;
pub use codec::{decode, encode, is_full, is_short, is_valid};
pub use constants::{
    AREA_PREFIX_LENGTH, CODE_ALPHABET, DEFAULT_PRECISION, GLOBAL_CODE_LENGTH, MAX_CODE_LENGTH,
    MIN_CODE_LENGTH, PADDING_CHAR, PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION,
};
pub use encoder::{LocationEncoder, OpenLocationCode};
