use crate::size::Size;

/// A device reachable only behind the peripheral interface.
///
/// The PI bus carries halfword (DMA) and word (CPU) transactions only,
/// so devices expose both natively and nothing is synthesized. Call the
/// native accessors directly where the width is fixed at the call site;
/// `read` and `write` dispatch a runtime width and panic on an illegal
/// one.
pub trait PiInterface {
    fn read_half(&mut self, addr: u32) -> u16;
    fn write_half(&mut self, addr: u32, data: u16);
    fn read_word(&mut self, addr: u32) -> u32;
    fn write_word(&mut self, addr: u32, data: u32);

    fn read(&mut self, size: Size, addr: u32) -> u64 {
        match size {
            Size::Half => self.read_half(addr) as u64,
            Size::Word => self.read_word(addr) as u64,
            _ => panic!("illegal {:?} read on PI bus at {:X}", size, addr),
        }
    }

    fn write(&mut self, size: Size, addr: u32, data: u64) {
        match size {
            Size::Half => self.write_half(addr, data as u16),
            Size::Word => self.write_word(addr, data as u32),
            _ => panic!("illegal {:?} write on PI bus at {:X}", size, addr),
        }
    }
}
