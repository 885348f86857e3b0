use crate::size::Size;

/// Cycles charged for a read when the device does not report
/// a more specific cost.
pub const DEFAULT_READ_CYCLES: u32 = 20;

/// Cycles charged for a write.
/// Stays at zero until the CPU write queue is emulated.
pub const DEFAULT_WRITE_CYCLES: u32 = 0;

/// A device attached to the RCP internal bus.
///
/// RCP devices are word-addressable only. Byte, halfword and doubleword
/// accesses are synthesized from the word accessors here, so a device
/// implements just `read_word` and `write_word`.
///
/// Lanes are big-endian: byte 0 of a word is its most significant byte.
pub trait RcpInterface {
    /// Read the word containing `addr`.
    ///
    /// The device may overwrite `cycles` with a more specific cost.
    fn read_word(&mut self, addr: u32, cycles: &mut u32) -> u32;

    /// Write the word containing `addr`.
    ///
    /// The device may overwrite `cycles` with a more specific cost.
    fn write_word(&mut self, addr: u32, data: u32, cycles: &mut u32);

    /// Read `size` bytes at `addr`, right-justified in the result.
    ///
    /// Dual reads the word at `addr` before the word at `addr + 4`.
    /// The order is visible to devices with read side effects.
    fn read(&mut self, size: Size, addr: u32, cycles: &mut u32) -> u64 {
        *cycles = DEFAULT_READ_CYCLES;
        match size {
            Size::Byte => {
                let data = self.read_word(addr, cycles);
                ((data >> (24 - 8 * (addr & 3))) & 0xFF) as u64
            },
            Size::Half => {
                let data = self.read_word(addr, cycles);
                ((data >> (16 - 16 * ((addr >> 1) & 1))) & 0xFFFF) as u64
            },
            Size::Word => self.read_word(addr, cycles) as u64,
            Size::Dual => {
                let hi = self.read_word(addr, cycles) as u64;
                let lo = self.read_word(addr + 4, cycles) as u64;
                (hi << 32) | lo
            },
        }
    }

    /// Write the low `size` bytes of `data` at `addr`.
    ///
    /// Byte and halfword writes shift the value into its big-endian lane
    /// and forward a single word with only that lane populated. There is
    /// no read-modify-write here: a device that must preserve the rest of
    /// the word merges it itself.
    ///
    /// Dual forwards only the high word of `data` to the device; the low
    /// word is never written. Like [`DEFAULT_WRITE_CYCLES`], this is tied
    /// to the missing CPU write queue and kept as-is.
    fn write(&mut self, size: Size, addr: u32, data: u64, cycles: &mut u32) {
        *cycles = DEFAULT_WRITE_CYCLES;
        match size {
            Size::Byte => self.write_word(addr, (data as u32) << (24 - 8 * (addr & 3)), cycles),
            Size::Half => self.write_word(addr, (data as u32) << (16 - 16 * ((addr >> 1) & 1)), cycles),
            Size::Word => self.write_word(addr, data as u32, cycles),
            Size::Dual => self.write_word(addr, (data >> 32) as u32, cycles),
        }
    }
}
