//! ### +3DOS header
//!
//! Every file written by +3DOS starts with a 128 byte header.  For BASIC programs the
//! header carries the program length twice (as the data length and as the offset to the
//! variables area, which is the same thing when no variables are saved) and the autostart
//! line, where the value 32768 means there is none.  Byte 127 is the sum of the other bytes.
//! The `binrw` crate is used to map the header onto the byte stream.

use binrw::io::Cursor;
use binrw::{BinRead,BinWrite};
use num_traits::FromPrimitive;
use log::{warn,info,debug};
use super::{Error,FileType};
use crate::DYNERR;

pub const HEADER_LEN: usize = 128;
/// Wire value of the autostart field when there is no autostart line
pub const NO_AUTOSTART: u16 = 32768;
const SIGNATURE: &[u8;8] = b"PLUS3DOS";
/// some tools write this instead, only the first 7 bytes are checked
const ALT_SIGNATURE: &[u8;7] = b"ZXPLUS3";
const SOFT_EOF: u8 = 0x1a;
const ISSUE: u8 = 1;
const VERSION: u8 = 0;

// all header entries are LE numbers
#[derive(BinRead,BinWrite,Debug,Clone,PartialEq)]
#[brw(little)]
pub struct FileHeader {
    pub signature: [u8;8],
    pub soft_eof: u8,
    pub issue: u8,
    pub version: u8,
    /// length of the whole file including this header
    pub file_size: u32,
    pub file_type: u8,
    pub data_len: u16,
    /// autostart line for programs
    pub param1: u16,
    /// offset to the variables for programs, i.e. the program length
    pub param2: u16,
    pub reserved: [u8;105],
    pub checksum: u8
}

impl FileHeader {
    /// Header for a BASIC program of `payload_length` bytes.
    /// Autostart values outside 0..32768 are written as the sentinel.
    pub fn new_program(payload_length: u32,autostart: Option<u16>) -> Self {
        if payload_length > u16::MAX as u32 {
            warn!("program length {} does not fit the header, it will be truncated",payload_length);
        }
        let prog_len = payload_length as u16;
        let param1 = match autostart {
            Some(line) if line < NO_AUTOSTART => line,
            _ => NO_AUTOSTART
        };
        let mut ans = Self {
            signature: *SIGNATURE,
            soft_eof: SOFT_EOF,
            issue: ISSUE,
            version: VERSION,
            file_size: payload_length.wrapping_add(HEADER_LEN as u32),
            file_type: FileType::Program as u8,
            data_len: prog_len,
            param1,
            param2: prog_len,
            reserved: [0;105],
            checksum: 0
        };
        ans.checksum = ans.compute_checksum();
        ans
    }
    /// Does the data start with a header, checks length and signature
    pub fn test(dat: &[u8]) -> bool {
        dat.len() >= HEADER_LEN && (dat[0..8] == SIGNATURE[..] || dat[0..7] == ALT_SIGNATURE[..])
    }
    pub fn from_bytes(dat: &[u8]) -> Result<Self,DYNERR> {
        if dat.len() < HEADER_LEN {
            return Err(Box::new(Error::HeaderFormat));
        }
        let mut curs = Cursor::new(&dat[0..HEADER_LEN]);
        Ok(Self::read(&mut curs)?)
    }
    pub fn to_bytes(&self) -> Result<Vec<u8>,DYNERR> {
        let mut curs = Cursor::new(Vec::new());
        self.write(&mut curs)?;
        Ok(curs.into_inner())
    }
    /// sum of bytes 0..127 modulo 256
    fn compute_checksum(&self) -> u8 {
        let mut sum: u32 = 0;
        for b in self.signature.iter().chain(self.reserved.iter()) {
            sum += *b as u32;
        }
        for b in [self.soft_eof,self.issue,self.version,self.file_type] {
            sum += b as u32;
        }
        for b in self.file_size.to_le_bytes() {
            sum += b as u32;
        }
        for word in [self.data_len,self.param1,self.param2] {
            for b in word.to_le_bytes() {
                sum += b as u32;
            }
        }
        (sum % 256) as u8
    }
    pub fn checksum_ok(&self) -> bool {
        self.checksum == self.compute_checksum()
    }
    pub fn file_type(&self) -> Option<FileType> {
        FileType::from_u8(self.file_type)
    }
    /// Autostart line, or None if the header holds the sentinel
    pub fn autostart(&self) -> Option<u16> {
        match self.param1 {
            NO_AUTOSTART => None,
            line => Some(line)
        }
    }
    pub fn to_json_value(&self) -> json::JsonValue {
        let autostart = match self.autostart() {
            Some(line) => json::JsonValue::from(line),
            None => json::JsonValue::Null
        };
        let file_type = match self.file_type() {
            Some(typ) => json::JsonValue::from(typ.to_string()),
            None => json::JsonValue::from(hex::encode_upper([self.file_type]))
        };
        json::object! {
            signature: String::from_utf8_lossy(&self.signature).to_string(),
            issue: self.issue,
            version: self.version,
            file_size: self.file_size,
            file_type: file_type,
            data_len: self.data_len,
            autostart: autostart,
            vars_offset: self.param2,
            checksum: hex::encode_upper([self.checksum]),
            checksum_ok: self.checksum_ok()
        }
    }
    pub fn to_json(&self,indent: Option<u16>) -> String {
        match indent {
            Some(spaces) => json::stringify_pretty(self.to_json_value(),spaces),
            None => json::stringify(self.to_json_value())
        }
    }
}

/// Build the 128 byte header for a BASIC program with `payload_length` bytes of lines.
pub fn build_header(payload_length: u32,autostart: Option<u16>) -> Result<Vec<u8>,DYNERR> {
    FileHeader::new_program(payload_length,autostart).to_bytes()
}

/// Return the header if the data starts with one, otherwise the data is taken to be headerless.
/// Problems with the header's content are logged but do not reject it.
pub fn read_header(dat: &[u8]) -> Option<FileHeader> {
    if !FileHeader::test(dat) {
        debug!("no +3DOS signature, treating as headerless");
        return None;
    }
    match FileHeader::from_bytes(dat) {
        Ok(header) => {
            info!("identified +3DOS header");
            if !header.checksum_ok() {
                warn!("header checksum is {:02X}, expected {:02X}",header.checksum,header.compute_checksum());
            }
            match header.file_type() {
                Some(FileType::Program) => {},
                Some(typ) => warn!("header describes a {} rather than a program",typ),
                None => warn!("unknown file type {} in header",header.file_type)
            }
            Some(header)
        },
        Err(e) => {
            debug!("header could not be read: {}",e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let header = build_header(0x1234,Some(10)).expect("build failed");
        assert_eq!(header.len(),HEADER_LEN);
        assert_eq!(&header[0..8],b"PLUS3DOS");
        assert_eq!(header[8..11],[0x1a,0x01,0x00]);
        assert_eq!(header[11..15],[0xb4,0x12,0x00,0x00]);
        assert_eq!(header[15],0);
        assert_eq!(header[16..18],[0x34,0x12]);
        assert_eq!(header[18..20],[10,0]);
        assert_eq!(header[20..22],[0x34,0x12]);
        assert!(header[22..127].iter().all(|b| *b==0));
    }
    #[test]
    fn checksum() {
        for (len,auto) in [(0,None),(27,Some(10)),(4000,Some(32767)),(65535,None)] {
            let header = build_header(len,auto).expect("build failed");
            let sum: u32 = header[0..127].iter().map(|b| *b as u32).sum();
            assert_eq!(header[127],(sum % 256) as u8);
        }
    }
    #[test]
    fn autostart_sentinel() {
        let header = build_header(100,None).expect("build failed");
        assert_eq!(header[18..20],[0x00,0x80]);
        let parsed = read_header(&header).expect("header not recognized");
        assert_eq!(parsed.autostart(),None);
        // out of range requests are also written as the sentinel
        let header = build_header(100,Some(40000)).expect("build failed");
        assert_eq!(header[18..20],[0x00,0x80]);
    }
    #[test]
    fn read_back() {
        let header = build_header(300,Some(1000)).expect("build failed");
        let parsed = read_header(&header).expect("header not recognized");
        assert_eq!(parsed.autostart(),Some(1000));
        assert_eq!(parsed.data_len,300);
        assert_eq!(parsed.param2,300);
        assert_eq!(parsed.file_size,428);
        assert_eq!(parsed.file_type(),Some(FileType::Program));
        assert!(parsed.checksum_ok());
        assert_eq!(parsed.to_bytes().expect("write failed"),header);
    }
    #[test]
    fn alternate_signature() {
        let mut header = build_header(0,Some(20)).expect("build failed");
        header[0..8].copy_from_slice(b"ZXPLUS3!");
        let parsed = read_header(&header).expect("header not recognized");
        assert_eq!(parsed.autostart(),Some(20));
        assert!(!parsed.checksum_ok());
    }
    #[test]
    fn json_summary() {
        let header = build_header(6,Some(10)).expect("build failed");
        let parsed = read_header(&header).expect("header not recognized");
        let obj = json::parse(&parsed.to_json(None)).expect("bad json");
        assert_eq!(obj["signature"],"PLUS3DOS");
        assert_eq!(obj["file_size"],134);
        assert_eq!(obj["file_type"],"program");
        assert_eq!(obj["autostart"],10);
        assert_eq!(obj["checksum_ok"],true);
        let parsed = read_header(&build_header(6,None).expect("build failed")).expect("header not recognized");
        assert!(parsed.to_json_value()["autostart"].is_null());
    }
    #[test]
    fn headerless() {
        let header = build_header(0,None).expect("build failed");
        assert!(read_header(&header[0..127]).is_none());
        let mut other = header.clone();
        other[0] = b'X';
        assert!(read_header(&other).is_none());
        assert!(read_header(&[]).is_none());
    }
}
