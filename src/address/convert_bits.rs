//! General conversion between power-of-two bit group sizes.

use super::{AddressError, Result};

/// Regroup `data` from `from_bits`-wide values into `to_bits`-wide values.
///
/// With `pad == true` a final partial group is emitted left-padded with zero
/// bits, which is what cashaddr uses when packing bytes into 5-bit symbols.
/// With `pad == false` the input must divide cleanly: leftover bits of a full
/// input group, or non-zero padding bits, fail with
/// [`AddressError::PaddingError`]. Input values wider than `from_bits` are
/// masked down, matching the reference algorithm.
pub fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> Result<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut ret = Vec::with_capacity((data.len() * from_bits as usize) / to_bits as usize + 1);
    let maxv: u32 = (1 << to_bits) - 1;
    let max_acc: u32 = (1 << (from_bits + to_bits - 1)) - 1;

    for &value in data {
        acc = ((acc << from_bits) | u32::from(value)) & max_acc;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            ret.push(((acc >> bits) & maxv) as u8);
        }
    }

    if pad {
        if bits > 0 {
            ret.push(((acc << (to_bits - bits)) & maxv) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & maxv) != 0 {
        return Err(AddressError::PaddingError);
    }

    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_to_five_and_back() {
        let data = hex::decode("006fd39d9bbb63afe8ad3c0ec984bc101a0b5a88d6").unwrap();
        let packed = convert_bits(&data, 8, 5, true).unwrap();
        let unpacked = convert_bits(&packed, 5, 8, false).unwrap();
        assert_eq!(unpacked, data);
    }

    #[test]
    fn known_groups() {
        // 0xff 0x01 = 11111 11100 00000 1(0000 pad)
        assert_eq!(
            convert_bits(&[0xff, 0x01], 8, 5, true).unwrap(),
            vec![31, 28, 0, 16]
        );
        // A single byte always needs padding when regrouped to 5 bits.
        assert_eq!(convert_bits(&[0xff], 8, 5, true).unwrap(), vec![31, 28]);
    }

    #[test]
    fn unpadded_conversion_requires_clean_division() {
        // 8 bits cannot be regrouped into 5-bit values without padding.
        assert_eq!(
            convert_bits(&[0xff], 8, 5, false),
            Err(AddressError::PaddingError)
        );
        // Two 5-bit values leave 2 bits; non-zero leftovers are rejected.
        assert_eq!(
            convert_bits(&[0x1f, 0x1f], 5, 8, false),
            Err(AddressError::PaddingError)
        );
        // Zero leftovers below a full input group are fine.
        assert_eq!(convert_bits(&[0x1f, 0x1c], 5, 8, false).unwrap(), vec![0xff]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(convert_bits(&[], 8, 5, true).unwrap(), Vec::<u8>::new());
        assert_eq!(convert_bits(&[], 5, 8, false).unwrap(), Vec::<u8>::new());
    }
}
