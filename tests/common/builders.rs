//! Byte-stream builders for synthesized PUD files.

#![allow(dead_code)]

/// Appends sections to an in-memory PUD stream.
#[derive(Debug, Clone, Default)]
pub struct PudBuilder {
    bytes: Vec<u8>,
}

impl PudBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a well-formed section with an arbitrary tag.
    pub fn section(mut self, tag: &[u8; 4], payload: &[u8]) -> Self {
        self.bytes.extend_from_slice(tag);
        self.bytes
            .extend_from_slice(&(payload.len() as i32).to_le_bytes());
        self.bytes.extend_from_slice(payload);
        self
    }

    /// Append raw bytes, e.g. a truncated header.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn type_section(self, id: u32) -> Self {
        let mut payload = b"WAR2 MAP\0\0".to_vec();
        payload.extend_from_slice(&[0x0a, 0xff]);
        payload.extend_from_slice(&id.to_le_bytes());
        self.section(b"TYPE", &payload)
    }

    pub fn version(self, version: u16) -> Self {
        self.section(b"VER ", &version.to_le_bytes())
    }

    pub fn description(self, text: &str) -> Self {
        let mut payload = [0u8; 32];
        let len = text.len().min(32);
        payload[..len].copy_from_slice(&text.as_bytes()[..len]);
        self.section(b"DESC", &payload)
    }

    pub fn owners(self, owners: [u8; 16]) -> Self {
        self.section(b"OWNR", &owners)
    }

    pub fn sides(self, races: [u8; 16]) -> Self {
        self.section(b"SIDE", &races)
    }

    pub fn ai_profiles(self, profiles: [u8; 16]) -> Self {
        self.section(b"AIPL", &profiles)
    }

    pub fn gold(self, values: [u16; 16]) -> Self {
        self.section(b"SGLD", &u16_payload(&values))
    }

    pub fn lumber(self, values: [u16; 16]) -> Self {
        self.section(b"SLBR", &u16_payload(&values))
    }

    pub fn oil(self, values: [u16; 16]) -> Self {
        self.section(b"SOIL", &u16_payload(&values))
    }

    pub fn era(self, terrain: u16) -> Self {
        self.section(b"ERA ", &terrain.to_le_bytes())
    }

    pub fn erax(self, terrain: u16) -> Self {
        self.section(b"ERAX", &terrain.to_le_bytes())
    }

    pub fn dimensions(self, width: u16, height: u16) -> Self {
        let mut payload = width.to_le_bytes().to_vec();
        payload.extend_from_slice(&height.to_le_bytes());
        self.section(b"DIM ", &payload)
    }

    pub fn tiles(self, cells: &[u16]) -> Self {
        self.section(b"MTXM", &u16_payload(cells))
    }

    pub fn movement_map(self, cells: &[u16]) -> Self {
        self.section(b"SQM ", &u16_payload(cells))
    }

    pub fn action_map(self, cells: &[u16]) -> Self {
        self.section(b"REGM", &u16_payload(cells))
    }

    pub fn oil_map(self, cells: &[u16]) -> Self {
        self.section(b"OILM", &u16_payload(cells))
    }

    /// UNIT section from `(x, y, type, owner, resource)` tuples.
    pub fn units(self, units: &[(u16, u16, u8, u8, u16)]) -> Self {
        let mut payload = Vec::with_capacity(units.len() * 10);
        for &(x, y, type_id, owner, resource) in units {
            payload.extend_from_slice(&unit_record(x, y, type_id, owner, resource));
        }
        self.section(b"UNIT", &payload)
    }

    pub fn signature(self, value: u32) -> Self {
        self.section(b"SIGN", &value.to_le_bytes())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// One 10-byte UNIT record; the last two bytes are padding.
pub fn unit_record(x: u16, y: u16, type_id: u8, owner: u8, resource: u16) -> [u8; 10] {
    let mut record = [0u8; 10];
    record[0..2].copy_from_slice(&x.to_le_bytes());
    record[2..4].copy_from_slice(&y.to_le_bytes());
    record[4] = type_id;
    record[5] = owner;
    record[6..8].copy_from_slice(&resource.to_le_bytes());
    record
}

pub fn u16_payload(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// The minimal two-by-two map: every slot unused, no units, every tile 7.
pub fn minimal_map() -> PudBuilder {
    PudBuilder::new()
        .type_section(0x0000_1234)
        .version(17)
        .description("tiny")
        .dimensions(2, 2)
        .owners([3; 16])
        .units(&[])
        .tiles(&[7; 4])
}

/// A small two-player map with most sections present.
pub fn skirmish_map() -> PudBuilder {
    let mut owners = [3u8; 16];
    owners[0] = 5;
    owners[1] = 1;
    owners[15] = 0;
    let mut races = [2u8; 16];
    races[0] = 0;
    races[1] = 1;
    let mut gold = [0u16; 16];
    gold[0] = 2000;
    gold[1] = 2000;

    PudBuilder::new()
        .type_section(0xdead_beef)
        .version(19)
        .description("Two Rivers")
        .owners(owners)
        .sides(races)
        .ai_profiles([0; 16])
        .gold(gold)
        .lumber([1000; 16])
        .oil([500; 16])
        .era(1)
        .dimensions(4, 4)
        .tiles(&(0..16).collect::<Vec<u16>>())
        .movement_map(&[0x4000; 16])
        .oil_map(&[0; 8])
        .action_map(&[0; 16])
        .units(&[
            (1, 1, 94, 0, 0),
            (2, 2, 2, 0, 0),
            (3, 3, 3, 1, 0),
            (0, 3, 92, 15, 25000),
            (3, 0, 100, 15, 0),
            (1, 3, 20, 0, 0),
            (2, 0, 58, 1, 0),
        ])
        .signature(0)
}
