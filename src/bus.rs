use i2c::Message;

/// Register-addressed transport used by the driver. Only the two primitives the BMP180 needs are
/// required. Every `i2c::BulkTransfer` master implements it; tests use `mock::MockBus`.
pub trait RegisterBus {
    type Error;

    fn write_byte_to_register(
        &mut self,
        device: u8,
        register: u8,
        value: u8,
    ) -> Result<(), Self::Error>;

    /// Reads the 16-bit word stored at `register` and `register + 1`.
    fn read_word_from_register(&mut self, device: u8, register: u8) -> Result<u16, Self::Error>;
}

impl<T: i2c::BulkTransfer> RegisterBus for T {
    type Error = <T as i2c::Master>::Error;

    fn write_byte_to_register(
        &mut self,
        device: u8,
        register: u8,
        value: u8,
    ) -> Result<(), <T as i2c::Master>::Error> {
        self.i2c_transfer(&mut [Message::Write {
            address: u16::from(device),
            data: &[register, value],
            flags: Default::default(),
        }])
    }

    fn read_word_from_register(
        &mut self,
        device: u8,
        register: u8,
    ) -> Result<u16, <T as i2c::Master>::Error> {
        let mut buf = [0u8; 2];
        self.i2c_transfer(&mut [
            Message::Write {
                address: u16::from(device),
                data: &[register],
                flags: Default::default(),
            },
            Message::Read {
                address: u16::from(device),
                data: &mut buf,
                flags: Default::default(),
            },
        ])?;
        // MSB sits at the lower register address
        Ok(u16::from_be_bytes(buf))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use i2c::{ReadFlags, WriteFlags};

    /// Bare `i2c` master backed by a 256-byte register file with an auto-incrementing pointer,
    /// which is how the BMP180 behaves on the wire.
    struct FakeMaster {
        address: u16,
        memory: [u8; 256],
        pointer: u8,
        writes: Vec<Vec<u8>>,
    }

    #[derive(Debug, PartialEq, Eq)]
    struct WrongAddress;

    impl FakeMaster {
        fn new(address: u16) -> Self {
            Self {
                address,
                memory: [0; 256],
                pointer: 0,
                writes: Vec::new(),
            }
        }
    }

    impl i2c::Master for FakeMaster {
        type Error = WrongAddress;
    }

    impl i2c::BulkTransfer for FakeMaster {
        fn i2c_transfer_support(&mut self) -> Result<(ReadFlags, WriteFlags), WrongAddress> {
            Ok(Default::default())
        }

        fn i2c_transfer(&mut self, messages: &mut [Message]) -> Result<(), WrongAddress> {
            for message in messages.iter_mut() {
                match message {
                    Message::Write { address, data, .. } => {
                        if *address != self.address {
                            return Err(WrongAddress);
                        }
                        self.writes.push(data.to_vec());
                        if let Some((register, payload)) = data.split_first() {
                            self.pointer = *register;
                            for byte in payload {
                                self.memory[self.pointer as usize] = *byte;
                                self.pointer = self.pointer.wrapping_add(1);
                            }
                        }
                    }
                    Message::Read { address, data, .. } => {
                        if *address != self.address {
                            return Err(WrongAddress);
                        }
                        for byte in data.iter_mut() {
                            *byte = self.memory[self.pointer as usize];
                            self.pointer = self.pointer.wrapping_add(1);
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_read_word_is_big_endian() {
        let mut master = FakeMaster::new(0x77);
        master.memory[0xAA] = 0x01;
        master.memory[0xAB] = 0x98;
        assert_eq!(master.read_word_from_register(0x77, 0xAA), Ok(0x0198));
        assert_eq!(master.writes, vec![vec![0xAA]]);
    }

    #[test]
    fn test_write_byte_sends_register_then_value() {
        let mut master = FakeMaster::new(0x77);
        master.write_byte_to_register(0x77, 0xF4, 0x2E).unwrap();
        assert_eq!(master.writes, vec![vec![0xF4, 0x2E]]);
        assert_eq!(master.memory[0xF4], 0x2E);
    }

    #[test]
    fn test_wrong_device_address() {
        let mut master = FakeMaster::new(0x77);
        assert_eq!(master.read_word_from_register(0x76, 0xAA), Err(WrongAddress));
        assert_eq!(
            master.write_byte_to_register(0x76, 0xF4, 0x2E),
            Err(WrongAddress)
        );
    }
}
