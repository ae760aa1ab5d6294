use bytes::{Buf, BufMut};
use oracle_primitives::Symbol;

use crate::{CodecError, CodecResult, MessageTag, PriceMessage, PriceObservation};

/// Smallest encoded pair: length byte, one symbol byte and the value.
pub const MIN_PAIR_LEN: usize = 1 + 1 + 8;

/// Encodes a message into its canonical byte form.
pub fn encode(msg: &PriceMessage) -> Vec<u8> {
    let tag = msg.tag().as_str().as_bytes();
    let body_len: usize = msg.pairs().iter().map(|p| 1 + p.symbol().len() + 8).sum();
    let mut buf = Vec::with_capacity(1 + tag.len() + 8 + 4 + body_len);

    // Lengths are bounded by `MessageTag`, `MAX_SYMBOL_LEN` and `MAX_PAIRS`.
    buf.put_u8(tag.len() as u8);
    buf.put_slice(tag);
    buf.put_u64(msg.timestamp());
    buf.put_u32(msg.pairs().len() as u32);
    for pair in msg.pairs() {
        buf.put_u8(pair.symbol().len() as u8);
        buf.put_slice(pair.symbol().as_bytes());
        buf.put_u64(pair.value());
    }

    buf
}

/// Decodes a canonical message, rejecting anything [`encode`] would not produce.
pub fn decode(mut buf: &[u8]) -> CodecResult<PriceMessage> {
    let tag_len = read_u8(&mut buf, "tag length")? as usize;
    let tag_bytes = take(&mut buf, tag_len, "tag")?;
    let tag = MessageTag::from_bytes(tag_bytes).ok_or_else(|| {
        CodecError::UnknownTag(String::from_utf8_lossy(tag_bytes).into_owned())
    })?;

    let timestamp = read_u64(&mut buf, "timestamp")?;
    let count = read_u32(&mut buf, "pair count")?;

    // Bound the allocation by what the input can actually hold.
    if (count as usize).saturating_mul(MIN_PAIR_LEN) > buf.remaining() {
        return Err(CodecError::PairCountTooLarge {
            count,
            remaining: buf.remaining(),
        });
    }

    let mut pairs = Vec::with_capacity(count as usize);
    for index in 0..count as usize {
        let sym_len = read_u8(&mut buf, "symbol length")? as usize;
        if sym_len > buf.remaining() {
            return Err(CodecError::SymbolOverrun {
                len: sym_len,
                remaining: buf.remaining(),
            });
        }
        let sym_bytes = take(&mut buf, sym_len, "symbol")?;
        let symbol = Symbol::from_bytes(sym_bytes)
            .map_err(|source| CodecError::InvalidSymbol { index, source })?;
        let value = read_u64(&mut buf, "value")?;
        pairs.push(PriceObservation::new(symbol, value));
    }

    if buf.has_remaining() {
        return Err(CodecError::TrailingBytes(buf.remaining()));
    }

    PriceMessage::new(tag, timestamp, pairs)
}

fn take<'a>(buf: &mut &'a [u8], len: usize, field: &'static str) -> CodecResult<&'a [u8]> {
    if buf.len() < len {
        return Err(CodecError::Truncated(field));
    }
    let (head, tail) = buf.split_at(len);
    *buf = tail;
    Ok(head)
}

fn read_u8(buf: &mut &[u8], field: &'static str) -> CodecResult<u8> {
    ensure_remaining(buf, 1, field)?;
    Ok(buf.get_u8())
}

fn read_u32(buf: &mut &[u8], field: &'static str) -> CodecResult<u32> {
    ensure_remaining(buf, 4, field)?;
    Ok(buf.get_u32())
}

fn read_u64(buf: &mut &[u8], field: &'static str) -> CodecResult<u64> {
    ensure_remaining(buf, 8, field)?;
    Ok(buf.get_u64())
}

fn ensure_remaining(buf: &[u8], n: usize, field: &'static str) -> CodecResult<()> {
    if buf.remaining() < n {
        return Err(CodecError::Truncated(field));
    }
    Ok(())
}
