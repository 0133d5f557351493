/// H.264 `nal_unit_type` values, Table 7-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum H264NalUnitType {
    /// 0 and 24..=31
    Unspecified(u8),
    CodedSliceNonIDRPicture,
    CodedSliceDataPartitionA,
    CodedSliceDataPartitionB,
    CodedSliceDataPartitionC,
    CodedSliceIDRPicture,
    SupplementalEnhancementInformation,
    SequenceParameterSet,
    PictureParameterSet,
    AccessUnitDelimiter,
    SequenceEnd,
    StreamEnd,
    FillerData,
    SequenceParameterSetExtension,
    PrefixNALUnit,
    SubsetSequenceParameterSet,
    DepthParameterSet,
    /// 17, 18, 22 and 23
    Reserved(u8),
    CodedSliceAuxiliaryCodedPictureNonPartitioning,
    CodedSliceExtension,
    CodedSliceExtensionDepthViewComponent,
}

impl H264NalUnitType {
    /// Only the low five bits of `nal_unit_type` are looked at.
    pub fn from_type_id(nal_unit_type: u8) -> Self {
        match nal_unit_type & 0x1F {
            1 => Self::CodedSliceNonIDRPicture,
            2 => Self::CodedSliceDataPartitionA,
            3 => Self::CodedSliceDataPartitionB,
            4 => Self::CodedSliceDataPartitionC,
            5 => Self::CodedSliceIDRPicture,
            6 => Self::SupplementalEnhancementInformation,
            7 => Self::SequenceParameterSet,
            8 => Self::PictureParameterSet,
            9 => Self::AccessUnitDelimiter,
            10 => Self::SequenceEnd,
            11 => Self::StreamEnd,
            12 => Self::FillerData,
            13 => Self::SequenceParameterSetExtension,
            14 => Self::PrefixNALUnit,
            15 => Self::SubsetSequenceParameterSet,
            16 => Self::DepthParameterSet,
            id @ (17 | 18 | 22 | 23) => Self::Reserved(id),
            19 => Self::CodedSliceAuxiliaryCodedPictureNonPartitioning,
            20 => Self::CodedSliceExtension,
            21 => Self::CodedSliceExtensionDepthViewComponent,
            id => Self::Unspecified(id),
        }
    }

    pub fn type_id(&self) -> u8 {
        match self {
            Self::Unspecified(id) | Self::Reserved(id) => *id,
            Self::CodedSliceNonIDRPicture => 1,
            Self::CodedSliceDataPartitionA => 2,
            Self::CodedSliceDataPartitionB => 3,
            Self::CodedSliceDataPartitionC => 4,
            Self::CodedSliceIDRPicture => 5,
            Self::SupplementalEnhancementInformation => 6,
            Self::SequenceParameterSet => 7,
            Self::PictureParameterSet => 8,
            Self::AccessUnitDelimiter => 9,
            Self::SequenceEnd => 10,
            Self::StreamEnd => 11,
            Self::FillerData => 12,
            Self::SequenceParameterSetExtension => 13,
            Self::PrefixNALUnit => 14,
            Self::SubsetSequenceParameterSet => 15,
            Self::DepthParameterSet => 16,
            Self::CodedSliceAuxiliaryCodedPictureNonPartitioning => 19,
            Self::CodedSliceExtension => 20,
            Self::CodedSliceExtensionDepthViewComponent => 21,
        }
    }

    /// Coded slices and slice data partitions.
    pub fn is_vcl(&self) -> bool {
        matches!(self.type_id(), 1..=5)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unspecified(_) => "unspecified",
            Self::Reserved(_) => "reserved",
            Self::CodedSliceNonIDRPicture => "non-IDR slice",
            Self::CodedSliceDataPartitionA => "slice data partition A",
            Self::CodedSliceDataPartitionB => "slice data partition B",
            Self::CodedSliceDataPartitionC => "slice data partition C",
            Self::CodedSliceIDRPicture => "IDR slice",
            Self::SupplementalEnhancementInformation => "SEI",
            Self::SequenceParameterSet => "SPS",
            Self::PictureParameterSet => "PPS",
            Self::AccessUnitDelimiter => "AUD",
            Self::SequenceEnd => "end of sequence",
            Self::StreamEnd => "end of stream",
            Self::FillerData => "filler data",
            Self::SequenceParameterSetExtension => "SPS extension",
            Self::PrefixNALUnit => "prefix NAL unit",
            Self::SubsetSequenceParameterSet => "subset SPS",
            Self::DepthParameterSet => "DPS",
            Self::CodedSliceAuxiliaryCodedPictureNonPartitioning => "auxiliary slice",
            Self::CodedSliceExtension => "slice extension",
            Self::CodedSliceExtensionDepthViewComponent => "depth view slice extension",
        }
    }
}

/// HEVC `nal_unit_type` values, Table 7-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HevcNalUnitType {
    TrailN,
    TrailR,
    TsaN,
    TsaR,
    StsaN,
    StsaR,
    RadlN,
    RadlR,
    RaslN,
    RaslR,
    /// RSV_VCL_N10..RSV_VCL_R15 and RSV_VCL24..RSV_VCL31
    ReservedVcl(u8),
    BlaWLp,
    BlaWRadl,
    BlaNLp,
    IdrWRadl,
    IdrNLp,
    Cra,
    /// RSV_IRAP_VCL22 and RSV_IRAP_VCL23
    ReservedIrapVcl(u8),
    Vps,
    Sps,
    Pps,
    Aud,
    Eos,
    Eob,
    FillerData,
    PrefixSei,
    SuffixSei,
    /// RSV_NVCL41..RSV_NVCL47
    ReservedNonVcl(u8),
    /// UNSPEC48..UNSPEC63
    Unspecified(u8),
}

impl HevcNalUnitType {
    /// Only the low six bits of `nal_unit_type` are looked at.
    pub fn from_type_id(nal_unit_type: u8) -> Self {
        match nal_unit_type & 0x3F {
            0 => Self::TrailN,
            1 => Self::TrailR,
            2 => Self::TsaN,
            3 => Self::TsaR,
            4 => Self::StsaN,
            5 => Self::StsaR,
            6 => Self::RadlN,
            7 => Self::RadlR,
            8 => Self::RaslN,
            9 => Self::RaslR,
            id @ (10..=15 | 24..=31) => Self::ReservedVcl(id),
            16 => Self::BlaWLp,
            17 => Self::BlaWRadl,
            18 => Self::BlaNLp,
            19 => Self::IdrWRadl,
            20 => Self::IdrNLp,
            21 => Self::Cra,
            id @ (22 | 23) => Self::ReservedIrapVcl(id),
            32 => Self::Vps,
            33 => Self::Sps,
            34 => Self::Pps,
            35 => Self::Aud,
            36 => Self::Eos,
            37 => Self::Eob,
            38 => Self::FillerData,
            39 => Self::PrefixSei,
            40 => Self::SuffixSei,
            id @ 41..=47 => Self::ReservedNonVcl(id),
            id => Self::Unspecified(id),
        }
    }

    pub fn type_id(&self) -> u8 {
        match self {
            Self::TrailN => 0,
            Self::TrailR => 1,
            Self::TsaN => 2,
            Self::TsaR => 3,
            Self::StsaN => 4,
            Self::StsaR => 5,
            Self::RadlN => 6,
            Self::RadlR => 7,
            Self::RaslN => 8,
            Self::RaslR => 9,
            Self::BlaWLp => 16,
            Self::BlaWRadl => 17,
            Self::BlaNLp => 18,
            Self::IdrWRadl => 19,
            Self::IdrNLp => 20,
            Self::Cra => 21,
            Self::Vps => 32,
            Self::Sps => 33,
            Self::Pps => 34,
            Self::Aud => 35,
            Self::Eos => 36,
            Self::Eob => 37,
            Self::FillerData => 38,
            Self::PrefixSei => 39,
            Self::SuffixSei => 40,
            Self::ReservedVcl(id)
            | Self::ReservedIrapVcl(id)
            | Self::ReservedNonVcl(id)
            | Self::Unspecified(id) => *id,
        }
    }

    pub fn is_vcl(&self) -> bool {
        self.type_id() < 32
    }

    /// BLA, IDR, CRA and the reserved IRAP types.
    pub fn is_irap(&self) -> bool {
        matches!(self.type_id(), 16..=23)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::TrailN => "TRAIL_N",
            Self::TrailR => "TRAIL_R",
            Self::TsaN => "TSA_N",
            Self::TsaR => "TSA_R",
            Self::StsaN => "STSA_N",
            Self::StsaR => "STSA_R",
            Self::RadlN => "RADL_N",
            Self::RadlR => "RADL_R",
            Self::RaslN => "RASL_N",
            Self::RaslR => "RASL_R",
            Self::ReservedVcl(_) => "RSV_VCL",
            Self::BlaWLp => "BLA_W_LP",
            Self::BlaWRadl => "BLA_W_RADL",
            Self::BlaNLp => "BLA_N_LP",
            Self::IdrWRadl => "IDR_W_RADL",
            Self::IdrNLp => "IDR_N_LP",
            Self::Cra => "CRA_NUT",
            Self::ReservedIrapVcl(_) => "RSV_IRAP_VCL",
            Self::Vps => "VPS_NUT",
            Self::Sps => "SPS_NUT",
            Self::Pps => "PPS_NUT",
            Self::Aud => "AUD_NUT",
            Self::Eos => "EOS_NUT",
            Self::Eob => "EOB_NUT",
            Self::FillerData => "FD_NUT",
            Self::PrefixSei => "PREFIX_SEI_NUT",
            Self::SuffixSei => "SUFFIX_SEI_NUT",
            Self::ReservedNonVcl(_) => "RSV_NVCL",
            Self::Unspecified(_) => "UNSPEC",
        }
    }
}
