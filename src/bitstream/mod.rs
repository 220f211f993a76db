//! The bitstream module forms the bit-level I/O subsystem for rankzip.
//!
//! The rank codec writes fields that are not byte sized: a one bit record flag, a rank that is
//! `log2(N)` bits wide, length prefixes that are `log2(V)` or `log2(C)` bits wide. BitPacker packs
//! those fields most significant bit first into a byte vector and pads the final byte with ones.
//! BitReader reads them back, refusing to read past the end of the buffer.
//!
pub mod bitpacker;
pub mod bitreader;
