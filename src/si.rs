use crate::size::Size;

/// A device reachable only behind the serial interface.
///
/// The SI bus carries word transactions only, for both CPU and DMA.
pub trait SiInterface {
    fn read_word(&mut self, addr: u32) -> u32;
    fn write_word(&mut self, addr: u32, data: u32);

    fn read(&mut self, size: Size, addr: u32) -> u64 {
        match size {
            Size::Word => self.read_word(addr) as u64,
            _ => panic!("illegal {:?} read on SI bus at {:X}", size, addr),
        }
    }

    fn write(&mut self, size: Size, addr: u32, data: u64) {
        match size {
            Size::Word => self.write_word(addr, data as u32),
            _ => panic!("illegal {:?} write on SI bus at {:X}", size, addr),
        }
    }
}

#[cfg(test)]
mod test;
