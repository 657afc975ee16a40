//! Keyword tokens for ZX Spectrum BASIC with the Next extensions.
//!
//! The canonical list pairs each code with the spelling the detokenizer prints,
//! followed by any alternative spellings the tokenizer will accept.

use std::collections::HashMap;

pub const REM_TOK: u8 = 0xea;

pub const TOKENS: [(u8,&str,&[&str]);121] = [
    // Next extensions
    (0x87,"PEEK$",&[]),
    (0x88,"REG",&[]),
    (0x89,"DPOKE",&[]),
    (0x8a,"DPEEK",&[]),
    (0x8b,"MOD",&[]),
    (0x8c,"<<",&[]),
    (0x8d,">>",&[]),
    (0x8e,"UNTIL",&[]),
    (0x8f,"ERROR",&[]),
    (0x90,"ON",&[]),
    (0x91,"DEFPROC",&[]),
    (0x92,"ENDPROC",&[]),
    (0x93,"PROC",&[]),
    (0x94,"LOCAL",&[]),
    (0x95,"DRIVER",&[]),
    (0x96,"WHILE",&[]),
    (0x97,"REPEAT",&[]),
    (0x98,"ELSE",&[]),
    (0x99,"REMOUNT",&[]),
    (0x9a,"BANK",&[]),
    (0x9b,"TILE",&[]),
    (0x9c,"LAYER",&[]),
    (0x9d,"PALETTE",&[]),
    (0x9e,"SPRITE",&[]),
    (0x9f,"PWD",&[]),
    (0xa0,"CD",&[]),
    (0xa1,"MKDIR",&[]),
    (0xa2,"RMDIR",&[]),
    // 48K and 128K
    (0xa3,"SPECTRUM",&[]),
    (0xa4,"PLAY",&[]),
    (0xa5,"RND",&[]),
    (0xa6,"INKEY$",&[]),
    (0xa7,"PI",&[]),
    (0xa8,"FN",&[]),
    (0xa9,"POINT",&[]),
    (0xaa,"SCREEN$",&[]),
    (0xab,"ATTR",&[]),
    (0xac,"AT",&[]),
    (0xad,"TAB",&[]),
    (0xae,"VAL$",&[]),
    (0xaf,"CODE",&[]),
    (0xb0,"VAL",&[]),
    (0xb1,"LEN",&[]),
    (0xb2,"SIN",&[]),
    (0xb3,"COS",&[]),
    (0xb4,"TAN",&[]),
    (0xb5,"ASN",&[]),
    (0xb6,"ACS",&[]),
    (0xb7,"ATN",&[]),
    (0xb8,"LN",&[]),
    (0xb9,"EXP",&[]),
    (0xba,"INT",&[]),
    (0xbb,"SQR",&[]),
    (0xbc,"SGN",&[]),
    (0xbd,"ABS",&[]),
    (0xbe,"PEEK",&[]),
    (0xbf,"IN",&[]),
    (0xc0,"USR",&[]),
    (0xc1,"STR$",&[]),
    (0xc2,"CHR$",&[]),
    (0xc3,"NOT",&[]),
    (0xc4,"BIN",&[]),
    (0xc5,"OR",&[]),
    (0xc6,"AND",&[]),
    (0xc7,"<=",&[]),
    (0xc8,">=",&[]),
    (0xc9,"<>",&[]),
    (0xca,"LINE",&[]),
    (0xcb,"THEN",&[]),
    (0xcc,"TO",&[]),
    (0xcd,"STEP",&[]),
    (0xce,"DEF FN",&[]),
    (0xcf,"CAT",&[]),
    (0xd0,"FORMAT",&[]),
    (0xd1,"MOVE",&[]),
    (0xd2,"ERASE",&[]),
    (0xd3,"OPEN #",&[]),
    (0xd4,"CLOSE #",&[]),
    (0xd5,"MERGE",&[]),
    (0xd6,"VERIFY",&[]),
    (0xd7,"BEEP",&[]),
    (0xd8,"CIRCLE",&[]),
    (0xd9,"INK",&[]),
    (0xda,"PAPER",&[]),
    (0xdb,"FLASH",&[]),
    (0xdc,"BRIGHT",&[]),
    (0xdd,"INVERSE",&[]),
    (0xde,"OVER",&[]),
    (0xdf,"OUT",&[]),
    (0xe0,"LPRINT",&[]),
    (0xe1,"LLIST",&[]),
    (0xe2,"STOP",&[]),
    (0xe3,"READ",&[]),
    (0xe4,"DATA",&[]),
    (0xe5,"RESTORE",&[]),
    (0xe6,"NEW",&[]),
    (0xe7,"BORDER",&[]),
    (0xe8,"CONTINUE",&[]),
    (0xe9,"DIM",&[]),
    (0xea,"REM",&[]),
    (0xeb,"FOR",&[]),
    (0xec,"GO TO",&["GOTO"]),
    (0xed,"GO SUB",&["GOSUB"]),
    (0xee,"INPUT",&[]),
    (0xef,"LOAD",&[]),
    (0xf0,"LIST",&[]),
    (0xf1,"LET",&[]),
    (0xf2,"PAUSE",&[]),
    (0xf3,"NEXT",&[]),
    (0xf4,"POKE",&[]),
    (0xf5,"PRINT",&[]),
    (0xf6,"PLOT",&[]),
    (0xf7,"RUN",&[]),
    (0xf8,"SAVE",&[]),
    (0xf9,"RANDOMIZE",&[]),
    (0xfa,"IF",&[]),
    (0xfb,"CLS",&[]),
    (0xfc,"DRAW",&[]),
    (0xfd,"CLEAR",&[]),
    (0xfe,"RETURN",&[]),
    (0xff,"COPY",&[])
];

/// Bidirectional map between keywords and token codes, built once from `TOKENS`.
pub struct TokenTable {
    detok_map: HashMap<u8,&'static str>,
    tok_map: HashMap<String,u8>,
    /// every spelling, longest first, for matching against source text
    by_length: Vec<(&'static str,u8)>
}

impl TokenTable {
    pub fn new() -> Self {
        let mut detok_map = HashMap::new();
        let mut tok_map = HashMap::new();
        let mut by_length = Vec::new();
        for (code,primary,aliases) in TOKENS {
            detok_map.insert(code,primary);
            for spelling in std::iter::once(&primary).chain(aliases.iter()) {
                tok_map.insert(spelling.to_string(),code);
                by_length.push((*spelling,code));
            }
        }
        // stable sort, equal lengths stay in code order
        by_length.sort_by(|a,b| b.0.len().cmp(&a.0.len()));
        Self {
            detok_map,
            tok_map,
            by_length
        }
    }
    pub fn lookup_by_code(&self,code: u8) -> Option<&'static str> {
        self.detok_map.get(&code).copied()
    }
    /// case insensitive, accepts the alternative spellings
    pub fn lookup_by_name(&self,name: &str) -> Option<u8> {
        self.tok_map.get(&name.to_ascii_uppercase()).copied()
    }
    pub fn all_keywords_by_descending_length(&self) -> &[(&'static str,u8)] {
        &self.by_length
    }
}
