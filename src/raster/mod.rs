mod gray_buffer;

#[allow(unused_imports)]
pub use gray_buffer::{offset_in_interleaved, GrayBuffer, GRAY_CHANNELS};
