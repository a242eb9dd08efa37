use fakesmith_core::Error;
use fakesmith_core::calculator::iban;

const CHECKSUM_FIXTURES: &[(&str, &str)] = &[
    ("AL47212110090000000235698741", "47"),
    ("AD1200012030200359100100", "12"),
    ("AT611904300234573201", "61"),
    ("AZ21NABZ00000000137010001944", "21"),
    ("BH67BMAG00001299123456", "67"),
    ("BE68539007547034", "68"),
    ("BA391290079401028494", "39"),
    ("BR7724891749412660603618210F3", "77"),
    ("BG80BNBG96611020345678", "80"),
    ("CR0515202001026284066", "05"),
    ("HR1210010051863000160", "12"),
    ("CY17002001280000001200527600", "17"),
    ("CZ6508000000192000145399", "65"),
    ("DK5000400440116243", "50"),
    ("DO28BAGR00000001212453611324", "28"),
    ("EE382200221020145685", "38"),
    ("FO6264600001631634", "62"),
    ("FI2112345600000785", "21"),
    ("FR1420041010050500013M02606", "14"),
    ("GE29NB0000000101904917", "29"),
    ("DE89370400440532013000", "89"),
    ("GI75NWBK000000007099453", "75"),
    ("GR1601101250000000012300695", "16"),
    ("GL8964710001000206", "89"),
    ("GT82TRAJ01020000001210029690", "82"),
    ("HU42117730161111101800000000", "42"),
    ("IS140159260076545510730339", "14"),
    ("IE29AIBK93115212345678", "29"),
    ("IL620108000000099999999", "62"),
    ("IT60X0542811101000000123456", "60"),
    ("KZ86125KZT5004100100", "86"),
    ("KW81CBKU0000000000001234560101", "81"),
    ("LV80BANK0000435195001", "80"),
    ("LB62099900000001001901229114", "62"),
    ("LI21088100002324013AA", "21"),
    ("LT121000011101001000", "12"),
    ("LU280019400644750000", "28"),
    ("MK07250120000058984", "07"),
    ("MT84MALT011000012345MTLCAST001S", "84"),
    ("MR1300020001010000123456753", "13"),
    ("MU17BOMM0101101030300200000MUR", "17"),
    ("MD24AG000225100013104168", "24"),
    ("MC5811222000010123456789030", "58"),
    ("ME25505000012345678951", "25"),
    ("NL91ABNA0417164300", "91"),
    ("NO9386011117947", "93"),
    ("PK36SCBL0000001123456702", "36"),
    ("PL61109010140000071219812874", "61"),
    ("PS92PALS000000000400123456702", "92"),
    ("PT50000201231234567890154", "50"),
    ("QA58DOHB00001234567890ABCDEFG", "58"),
    ("RO49AAAA1B31007593840000", "49"),
    ("SM86U0322509800000000270100", "86"),
    ("SA0380000000608010167519", "03"),
    ("RS35260005601001611379", "35"),
    ("SK3112000000198742637541", "31"),
    ("SI56263300012039086", "56"),
    ("ES9121000418450200051332", "91"),
    ("SE4550000000058398257466", "45"),
    ("CH9300762011623852957", "93"),
    ("TN5910006035183598478831", "59"),
    ("TR330006100519786457841326", "33"),
    ("AE070331234567890123456", "07"),
    ("GB29NWBK60161331926819", "29"),
    ("VG96VPVG0000012345678901", "96"),
    ("YY24KIHB12476423125915947930915268", "24"),
    ("ZZ25VLQT382332233206588011313776421", "25"),
];

const INVALID_FIXTURES: &[&str] = &[
    "AL4721211009000000023569874",
    "AD120001203020035910010",
    "AT61190430023457320",
    "AZ21NABZ0000000013701000194",
    "BH67BMAG0000129912345",
    "BE6853900754703",
    "BA39129007940102849",
    "BR7724891749412660603618210F",
    "BG80BNBG9661102034567",
    "CR051520200102628406",
    "HR121001005186300016",
    "CY1700200128000000120052760",
    "CZ650800000019200014539",
    "DK500040044011624",
    "DO28BAGR0000000121245361132",
    "EE38220022102014568",
    "FO626460000163163",
    "FI2112345600000780",
    "FR1420041010050500013M0260",
    "GE29NB000000010190491",
    "DE8937040044053201300",
    "GI75NWBK00000000709945",
    "GR160110125000000001230069",
    "GL896471000100020",
    "GT82TRAJ0102000000121002969",
    "HU4211773016111110180000000",
    "IS14015926007654551073033",
    "IE29AIBK9311521234567",
    "IL62010800000009999999",
    "IT60X054281110100000012345",
    "KZ86125KZT500410010",
    "KW81CBKU000000000000123456010",
    "LV80BANK000043519500",
    "LB6209990000000100190122911",
    "LI21088100002324013A",
    "LT12100001110100100",
    "LU28001940064475000",
    "MK0725012000005898",
    "MT84MALT011000012345MTLCAST001",
    "MR130002000101000012345675",
    "MU17BOMM0101101030300200000MU",
    "MD24AG00022510001310416",
    "MC58112220000101234567890",
    "ME2550500001234567895",
    "NL91ABNA041716430",
    "NO938601111794",
    "PK36SCBL000000112345670",
    "PL6110901014000007121981287",
    "PS92PALS00000000040012345670",
    "PT5000020123123456789015",
    "QA58DOHB00001234567890ABCDEF",
    "RO49AAAA1B3100759384000",
    "SM86U032250980000000027010",
    "SA038000000060801016751",
    "RS3526000560100161137",
    "SK311200000019874263754",
    "SI5626330001203908",
    "ES912100041845020005133",
    "SE455000000005839825746",
    "CH930076201162385295",
    "TN591000603518359847883",
    "TR33000610051978645784132",
    "AE07033123456789012345",
    "GB29NWBK6016133192681",
    "VG96VPVG000001234567890",
    "YY24KIHB1247642312591594793091526",
    "ZZ25VLQT38233223320658801131377642",
];

#[test]
fn checksum_matches_canonical_table() {
    for (value, expected) in CHECKSUM_FIXTURES {
        assert_eq!(iban::checksum(value).as_deref(), Ok(*expected), "{value}");
    }
}

#[test]
fn canonical_ibans_are_valid() {
    for (value, _) in CHECKSUM_FIXTURES {
        assert!(iban::is_valid(value), "{value}");
    }
}

#[test]
fn truncated_or_mutated_ibans_are_invalid() {
    for value in INVALID_FIXTURES {
        assert!(!iban::is_valid(value), "{value}");
    }
}

#[test]
fn checksum_ignores_existing_check_digits() {
    assert_eq!(iban::checksum("GB00NWBK60161331926819").as_deref(), Ok("29"));
    assert_eq!(iban::checksum("gb29nwbk60161331926819").as_deref(), Ok("29"));
}

#[test]
fn malformed_ibans_are_rejected() {
    assert!(matches!(iban::checksum("GB2"), Err(Error::InvalidInput(_))));
    assert!(matches!(
        iban::checksum("GB29-NWBK-6016"),
        Err(Error::InvalidInput(_))
    ));
    assert!(!iban::is_valid(""));
    assert!(!iban::is_valid("GB29 NWBK 6016 1331 9268 19"));
}

#[test]
fn alpha_to_number_maps_letters() {
    for (offset, letter) in ('A'..='Z').enumerate() {
        assert_eq!(iban::alpha_to_number(letter), Ok(10 + offset as u32), "{letter}");
    }
    assert_eq!(iban::alpha_to_number('q'), Ok(26));
    assert!(matches!(iban::alpha_to_number('7'), Err(Error::InvalidInput(_))));
}

#[test]
fn mod97_large_numbers() {
    assert_eq!(iban::mod97("123456789123456789"), Ok(7));
    assert_eq!(iban::mod97("111222333444555666"), Ok(73));
    assert_eq!(iban::mod97("4242424242424242424242"), Ok(19));
    assert_eq!(iban::mod97("271828182845904523536028"), Ok(68));
}

#[test]
fn mod97_small_numbers() {
    for value in 0_u32..200 {
        assert_eq!(iban::mod97(&value.to_string()), Ok(value % 97), "{value}");
    }
}

#[test]
fn mod97_rejects_non_digits() {
    assert!(matches!(iban::mod97(""), Err(Error::InvalidInput(_))));
    assert!(matches!(iban::mod97("12a4"), Err(Error::InvalidInput(_))));
}
