use super::*;

/// Serial-port device backed by a single word register.
struct SerialPort {
    reg: u32,
}

impl SiInterface for SerialPort {
    fn read_word(&mut self, _addr: u32) -> u32 {
        self.reg
    }

    fn write_word(&mut self, _addr: u32, data: u32) {
        self.reg = data;
    }
}

#[test]
fn word_read_dispatches_to_native_accessor() {
    let mut port = SerialPort { reg: 0x4A50_4953 };
    assert_eq!(port.read(Size::Word, 0x1FC0_07C0), 0x4A50_4953);
}

#[test]
fn word_write_truncates_to_thirty_two_bits() {
    let mut port = SerialPort { reg: 0 };
    port.write(Size::Word, 0x1FC0_07C0, 0xFFFF_FFFF_0BAD_F00D);
    assert_eq!(port.reg, 0x0BAD_F00D);
}

#[test]
#[should_panic(expected = "illegal Byte read on SI bus")]
fn byte_read_is_rejected() {
    let mut port = SerialPort { reg: 0 };
    port.read(Size::Byte, 0);
}

#[test]
#[should_panic(expected = "illegal Half read on SI bus")]
fn half_read_is_rejected() {
    let mut port = SerialPort { reg: 0 };
    port.read(Size::Half, 0);
}

#[test]
#[should_panic(expected = "illegal Dual write on SI bus")]
fn dual_write_is_rejected() {
    let mut port = SerialPort { reg: 0 };
    port.write(Size::Dual, 0, 0);
}
