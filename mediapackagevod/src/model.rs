/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::collections::HashMap;

string_enum! {
    AdMarkers {
        None => "NONE",
        Passthrough => "PASSTHROUGH",
        Scte35Enhanced => "SCTE35_ENHANCED",
    }
}

string_enum! {
    EncryptionMethod {
        Aes128 => "AES_128",
        SampleAes => "SAMPLE_AES",
    }
}

string_enum! {
    ManifestLayout {
        Compact => "COMPACT",
        Full => "FULL",
    }
}

string_enum! {
    PeriodTriggersElement {
        Ads => "ADS",
    }
}

string_enum! {
    Profile {
        Hbbtv15 => "HBBTV_1_5",
        None => "NONE",
    }
}

string_enum! {
    SegmentTemplateFormat {
        NumberWithDuration => "NUMBER_WITH_DURATION",
        NumberWithTimeline => "NUMBER_WITH_TIMELINE",
        TimeWithTimeline => "TIME_WITH_TIMELINE",
    }
}

string_enum! {
    StreamOrder {
        Original => "ORIGINAL",
        VideoBitrateAscending => "VIDEO_BITRATE_ASCENDING",
        VideoBitrateDescending => "VIDEO_BITRATE_DESCENDING",
    }
}

/// <p>A CMAF encryption configuration.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct CmafEncryption {
    /// <p>A configuration for accessing an external Secure Packager and Encoder Key Exchange (SPEKE)
    /// service that will provide encryption keys.</p>
    #[serde(rename = "spekeKeyProvider")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speke_key_provider: Option<SpekeKeyProvider>,
}
/// See [`CmafEncryption`](crate::model::CmafEncryption)
pub mod cmaf_encryption {
    use crate::model::{CmafEncryption, SpekeKeyProvider};

    /// A builder for [`CmafEncryption`](crate::model::CmafEncryption)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        speke_key_provider: Option<SpekeKeyProvider>,
    }
    impl Builder {
        pub fn speke_key_provider(mut self, inp: SpekeKeyProvider) -> Self {
            self.speke_key_provider = Some(inp);
            self
        }
        pub fn set_speke_key_provider(mut self, inp: Option<SpekeKeyProvider>) -> Self {
            self.speke_key_provider = inp;
            self
        }
        /// Consumes the builder and constructs a [`CmafEncryption`](crate::model::CmafEncryption)
        pub fn build(self) -> CmafEncryption {
            CmafEncryption {
                speke_key_provider: self.speke_key_provider,
            }
        }
    }
}
impl CmafEncryption {
    /// Creates a new builder-style object to manufacture [`CmafEncryption`](crate::model::CmafEncryption)
    pub fn builder() -> crate::model::cmaf_encryption::Builder {
        crate::model::cmaf_encryption::Builder::default()
    }
}

/// <p>A CMAF packaging configuration.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct CmafPackage {
    #[serde(rename = "encryption")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<CmafEncryption>,
    /// <p>A list of HLS manifest configurations.</p>
    #[serde(rename = "hlsManifests")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_manifests: Option<Vec<HlsManifest>>,
    /// <p>Duration (in seconds) of each fragment. Actual fragments will be rounded to the nearest
    /// multiple of the source fragment duration.</p>
    #[serde(rename = "segmentDurationSeconds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_duration_seconds: Option<i32>,
}
/// See [`CmafPackage`](crate::model::CmafPackage)
pub mod cmaf_package {
    use crate::model::{CmafEncryption, CmafPackage, HlsManifest};

    /// A builder for [`CmafPackage`](crate::model::CmafPackage)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        encryption: Option<CmafEncryption>,
        hls_manifests: Option<Vec<HlsManifest>>,
        segment_duration_seconds: Option<i32>,
    }
    impl Builder {
        pub fn encryption(mut self, inp: CmafEncryption) -> Self {
            self.encryption = Some(inp);
            self
        }
        pub fn set_encryption(mut self, inp: Option<CmafEncryption>) -> Self {
            self.encryption = inp;
            self
        }
        pub fn hls_manifests(mut self, inp: impl Into<HlsManifest>) -> Self {
            let mut v = self.hls_manifests.unwrap_or_default();
            v.push(inp.into());
            self.hls_manifests = Some(v);
            self
        }
        pub fn set_hls_manifests(mut self, inp: Option<Vec<HlsManifest>>) -> Self {
            self.hls_manifests = inp;
            self
        }
        pub fn segment_duration_seconds(mut self, inp: i32) -> Self {
            self.segment_duration_seconds = Some(inp);
            self
        }
        pub fn set_segment_duration_seconds(mut self, inp: Option<i32>) -> Self {
            self.segment_duration_seconds = inp;
            self
        }
        /// Consumes the builder and constructs a [`CmafPackage`](crate::model::CmafPackage)
        pub fn build(self) -> CmafPackage {
            CmafPackage {
                encryption: self.encryption,
                hls_manifests: self.hls_manifests,
                segment_duration_seconds: self.segment_duration_seconds,
            }
        }
    }
}
impl CmafPackage {
    /// Creates a new builder-style object to manufacture [`CmafPackage`](crate::model::CmafPackage)
    pub fn builder() -> crate::model::cmaf_package::Builder {
        crate::model::cmaf_package::Builder::default()
    }
}

/// <p>A Dynamic Adaptive Streaming over HTTP (DASH) encryption configuration.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct DashEncryption {
    /// <p>A configuration for accessing an external Secure Packager and Encoder Key Exchange (SPEKE)
    /// service that will provide encryption keys.</p>
    #[serde(rename = "spekeKeyProvider")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speke_key_provider: Option<SpekeKeyProvider>,
}
/// See [`DashEncryption`](crate::model::DashEncryption)
pub mod dash_encryption {
    use crate::model::{DashEncryption, SpekeKeyProvider};

    /// A builder for [`DashEncryption`](crate::model::DashEncryption)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        speke_key_provider: Option<SpekeKeyProvider>,
    }
    impl Builder {
        pub fn speke_key_provider(mut self, inp: SpekeKeyProvider) -> Self {
            self.speke_key_provider = Some(inp);
            self
        }
        pub fn set_speke_key_provider(mut self, inp: Option<SpekeKeyProvider>) -> Self {
            self.speke_key_provider = inp;
            self
        }
        /// Consumes the builder and constructs a [`DashEncryption`](crate::model::DashEncryption)
        pub fn build(self) -> DashEncryption {
            DashEncryption {
                speke_key_provider: self.speke_key_provider,
            }
        }
    }
}
impl DashEncryption {
    /// Creates a new builder-style object to manufacture [`DashEncryption`](crate::model::DashEncryption)
    pub fn builder() -> crate::model::dash_encryption::Builder {
        crate::model::dash_encryption::Builder::default()
    }
}

/// <p>A DASH manifest configuration.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct DashManifest {
    /// <p>Determines the position of some tags in the Media Presentation Description (MPD). When set
    /// to FULL, elements like SegmentTemplate and ContentProtection are included in each
    /// Representation. When set to COMPACT, duplicate elements are combined and presented at the
    /// AdaptationSet level.</p>
    #[serde(rename = "manifestLayout")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_layout: Option<ManifestLayout>,
    /// <p>An optional string to include in the name of the manifest.</p>
    #[serde(rename = "manifestName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_name: Option<String>,
    /// <p>Minimum duration (in seconds) that a player will buffer media before starting the
    /// presentation.</p>
    #[serde(rename = "minBufferTimeSeconds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_buffer_time_seconds: Option<i32>,
    /// <p>The Dynamic Adaptive Streaming over HTTP (DASH) profile type. When set to "HBBTV_1_5",
    /// HbbTV 1.5 compliant output is enabled.</p>
    #[serde(rename = "profile")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(rename = "streamSelection")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_selection: Option<StreamSelection>,
}
/// See [`DashManifest`](crate::model::DashManifest)
pub mod dash_manifest {
    use crate::model::{DashManifest, ManifestLayout, Profile, StreamSelection};

    /// A builder for [`DashManifest`](crate::model::DashManifest)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        manifest_layout: Option<ManifestLayout>,
        manifest_name: Option<String>,
        min_buffer_time_seconds: Option<i32>,
        profile: Option<Profile>,
        stream_selection: Option<StreamSelection>,
    }
    impl Builder {
        pub fn manifest_layout(mut self, inp: ManifestLayout) -> Self {
            self.manifest_layout = Some(inp);
            self
        }
        pub fn set_manifest_layout(mut self, inp: Option<ManifestLayout>) -> Self {
            self.manifest_layout = inp;
            self
        }
        pub fn manifest_name(mut self, inp: impl Into<String>) -> Self {
            self.manifest_name = Some(inp.into());
            self
        }
        pub fn set_manifest_name(mut self, inp: Option<String>) -> Self {
            self.manifest_name = inp;
            self
        }
        pub fn min_buffer_time_seconds(mut self, inp: i32) -> Self {
            self.min_buffer_time_seconds = Some(inp);
            self
        }
        pub fn set_min_buffer_time_seconds(mut self, inp: Option<i32>) -> Self {
            self.min_buffer_time_seconds = inp;
            self
        }
        pub fn profile(mut self, inp: Profile) -> Self {
            self.profile = Some(inp);
            self
        }
        pub fn set_profile(mut self, inp: Option<Profile>) -> Self {
            self.profile = inp;
            self
        }
        pub fn stream_selection(mut self, inp: StreamSelection) -> Self {
            self.stream_selection = Some(inp);
            self
        }
        pub fn set_stream_selection(mut self, inp: Option<StreamSelection>) -> Self {
            self.stream_selection = inp;
            self
        }
        /// Consumes the builder and constructs a [`DashManifest`](crate::model::DashManifest)
        pub fn build(self) -> DashManifest {
            DashManifest {
                manifest_layout: self.manifest_layout,
                manifest_name: self.manifest_name,
                min_buffer_time_seconds: self.min_buffer_time_seconds,
                profile: self.profile,
                stream_selection: self.stream_selection,
            }
        }
    }
}
impl DashManifest {
    /// Creates a new builder-style object to manufacture [`DashManifest`](crate::model::DashManifest)
    pub fn builder() -> crate::model::dash_manifest::Builder {
        crate::model::dash_manifest::Builder::default()
    }
}

/// <p>A Dynamic Adaptive Streaming over HTTP (DASH) packaging configuration.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct DashPackage {
    /// <p>A list of DASH manifest configurations.</p>
    #[serde(rename = "dashManifests")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_manifests: Option<Vec<DashManifest>>,
    #[serde(rename = "encryption")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<DashEncryption>,
    /// <p>A list of triggers that controls when the outgoing Dynamic Adaptive Streaming over HTTP
    /// (DASH) Media Presentation Description (MPD) will be partitioned into multiple periods.</p>
    #[serde(rename = "periodTriggers")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_triggers: Option<Vec<PeriodTriggersElement>>,
    #[serde(rename = "segmentDurationSeconds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_duration_seconds: Option<i32>,
    /// <p>Determines the type of SegmentTemplate included in the Media Presentation Description
    /// (MPD).</p>
    #[serde(rename = "segmentTemplateFormat")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_template_format: Option<SegmentTemplateFormat>,
}
/// See [`DashPackage`](crate::model::DashPackage)
pub mod dash_package {
    use crate::model::{DashEncryption, DashManifest, DashPackage, PeriodTriggersElement, SegmentTemplateFormat};

    /// A builder for [`DashPackage`](crate::model::DashPackage)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        dash_manifests: Option<Vec<DashManifest>>,
        encryption: Option<DashEncryption>,
        period_triggers: Option<Vec<PeriodTriggersElement>>,
        segment_duration_seconds: Option<i32>,
        segment_template_format: Option<SegmentTemplateFormat>,
    }
    impl Builder {
        pub fn dash_manifests(mut self, inp: impl Into<DashManifest>) -> Self {
            let mut v = self.dash_manifests.unwrap_or_default();
            v.push(inp.into());
            self.dash_manifests = Some(v);
            self
        }
        pub fn set_dash_manifests(mut self, inp: Option<Vec<DashManifest>>) -> Self {
            self.dash_manifests = inp;
            self
        }
        pub fn encryption(mut self, inp: DashEncryption) -> Self {
            self.encryption = Some(inp);
            self
        }
        pub fn set_encryption(mut self, inp: Option<DashEncryption>) -> Self {
            self.encryption = inp;
            self
        }
        pub fn period_triggers(mut self, inp: impl Into<PeriodTriggersElement>) -> Self {
            let mut v = self.period_triggers.unwrap_or_default();
            v.push(inp.into());
            self.period_triggers = Some(v);
            self
        }
        pub fn set_period_triggers(mut self, inp: Option<Vec<PeriodTriggersElement>>) -> Self {
            self.period_triggers = inp;
            self
        }
        pub fn segment_duration_seconds(mut self, inp: i32) -> Self {
            self.segment_duration_seconds = Some(inp);
            self
        }
        pub fn set_segment_duration_seconds(mut self, inp: Option<i32>) -> Self {
            self.segment_duration_seconds = inp;
            self
        }
        pub fn segment_template_format(mut self, inp: SegmentTemplateFormat) -> Self {
            self.segment_template_format = Some(inp);
            self
        }
        pub fn set_segment_template_format(mut self, inp: Option<SegmentTemplateFormat>) -> Self {
            self.segment_template_format = inp;
            self
        }
        /// Consumes the builder and constructs a [`DashPackage`](crate::model::DashPackage)
        pub fn build(self) -> DashPackage {
            DashPackage {
                dash_manifests: self.dash_manifests,
                encryption: self.encryption,
                period_triggers: self.period_triggers,
                segment_duration_seconds: self.segment_duration_seconds,
                segment_template_format: self.segment_template_format,
            }
        }
    }
}
impl DashPackage {
    /// Creates a new builder-style object to manufacture [`DashPackage`](crate::model::DashPackage)
    pub fn builder() -> crate::model::dash_package::Builder {
        crate::model::dash_package::Builder::default()
    }
}

/// <p>The endpoint URL used to access an Asset using one PackagingConfiguration.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct EgressEndpoint {
    /// <p>The ID of the PackagingConfiguration being applied to the Asset.</p>
    #[serde(rename = "packagingConfigurationId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_configuration_id: Option<String>,
    /// <p>The current processing status of the asset used for the packaging configuration. The
    /// status can be either QUEUED, PROCESSING, PLAYABLE, or FAILED.</p>
    #[serde(rename = "status")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// <p>The URL of the parent manifest for the repackaged Asset.</p>
    #[serde(rename = "url")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
/// See [`EgressEndpoint`](crate::model::EgressEndpoint)
pub mod egress_endpoint {
    use crate::model::EgressEndpoint;

    /// A builder for [`EgressEndpoint`](crate::model::EgressEndpoint)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        packaging_configuration_id: Option<String>,
        status: Option<String>,
        url: Option<String>,
    }
    impl Builder {
        pub fn packaging_configuration_id(mut self, inp: impl Into<String>) -> Self {
            self.packaging_configuration_id = Some(inp.into());
            self
        }
        pub fn set_packaging_configuration_id(mut self, inp: Option<String>) -> Self {
            self.packaging_configuration_id = inp;
            self
        }
        pub fn status(mut self, inp: impl Into<String>) -> Self {
            self.status = Some(inp.into());
            self
        }
        pub fn set_status(mut self, inp: Option<String>) -> Self {
            self.status = inp;
            self
        }
        pub fn url(mut self, inp: impl Into<String>) -> Self {
            self.url = Some(inp.into());
            self
        }
        pub fn set_url(mut self, inp: Option<String>) -> Self {
            self.url = inp;
            self
        }
        /// Consumes the builder and constructs a [`EgressEndpoint`](crate::model::EgressEndpoint)
        pub fn build(self) -> EgressEndpoint {
            EgressEndpoint {
                packaging_configuration_id: self.packaging_configuration_id,
                status: self.status,
                url: self.url,
            }
        }
    }
}
impl EgressEndpoint {
    /// Creates a new builder-style object to manufacture [`EgressEndpoint`](crate::model::EgressEndpoint)
    pub fn builder() -> crate::model::egress_endpoint::Builder {
        crate::model::egress_endpoint::Builder::default()
    }
}

/// <p>An HTTP Live Streaming (HLS) encryption configuration.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct HlsEncryption {
    /// <p>A constant initialization vector for encryption (optional). When not specified the
    /// initialization vector will be periodically rotated.</p>
    #[serde(rename = "constantInitializationVector")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant_initialization_vector: Option<String>,
    /// <p>The encryption method to use.</p>
    #[serde(rename = "encryptionMethod")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_method: Option<EncryptionMethod>,
    /// <p>A configuration for accessing an external Secure Packager and Encoder Key Exchange (SPEKE)
    /// service that will provide encryption keys.</p>
    #[serde(rename = "spekeKeyProvider")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speke_key_provider: Option<SpekeKeyProvider>,
}
/// See [`HlsEncryption`](crate::model::HlsEncryption)
pub mod hls_encryption {
    use crate::model::{EncryptionMethod, HlsEncryption, SpekeKeyProvider};

    /// A builder for [`HlsEncryption`](crate::model::HlsEncryption)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        constant_initialization_vector: Option<String>,
        encryption_method: Option<EncryptionMethod>,
        speke_key_provider: Option<SpekeKeyProvider>,
    }
    impl Builder {
        pub fn constant_initialization_vector(mut self, inp: impl Into<String>) -> Self {
            self.constant_initialization_vector = Some(inp.into());
            self
        }
        pub fn set_constant_initialization_vector(mut self, inp: Option<String>) -> Self {
            self.constant_initialization_vector = inp;
            self
        }
        pub fn encryption_method(mut self, inp: EncryptionMethod) -> Self {
            self.encryption_method = Some(inp);
            self
        }
        pub fn set_encryption_method(mut self, inp: Option<EncryptionMethod>) -> Self {
            self.encryption_method = inp;
            self
        }
        pub fn speke_key_provider(mut self, inp: SpekeKeyProvider) -> Self {
            self.speke_key_provider = Some(inp);
            self
        }
        pub fn set_speke_key_provider(mut self, inp: Option<SpekeKeyProvider>) -> Self {
            self.speke_key_provider = inp;
            self
        }
        /// Consumes the builder and constructs a [`HlsEncryption`](crate::model::HlsEncryption)
        pub fn build(self) -> HlsEncryption {
            HlsEncryption {
                constant_initialization_vector: self.constant_initialization_vector,
                encryption_method: self.encryption_method,
                speke_key_provider: self.speke_key_provider,
            }
        }
    }
}
impl HlsEncryption {
    /// Creates a new builder-style object to manufacture [`HlsEncryption`](crate::model::HlsEncryption)
    pub fn builder() -> crate::model::hls_encryption::Builder {
        crate::model::hls_encryption::Builder::default()
    }
}

/// <p>An HTTP Live Streaming (HLS) manifest configuration.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct HlsManifest {
    /// <p>This setting controls how ad markers are included in the packaged OriginEndpoint. "NONE"
    /// will omit all SCTE-35 ad markers from the output. "PASSTHROUGH" causes the manifest to
    /// contain a copy of the SCTE-35 ad markers (comments) taken directly from the input HTTP Live
    /// Streaming (HLS) manifest.</p>
    #[serde(rename = "adMarkers")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_markers: Option<AdMarkers>,
    /// <p>When enabled, an I-Frame only stream will be included in the output.</p>
    #[serde(rename = "includeIframeOnlyStream")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_iframe_only_stream: Option<bool>,
    /// <p>An optional string to include in the name of the manifest.</p>
    #[serde(rename = "manifestName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_name: Option<String>,
    /// <p>The interval (in seconds) between each EXT-X-PROGRAM-DATE-TIME tag inserted into HTTP
    /// Live Streaming (HLS) manifests.</p>
    #[serde(rename = "programDateTimeIntervalSeconds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_date_time_interval_seconds: Option<i32>,
    /// <p>When enabled, the EXT-X-KEY tag will be repeated in output manifests.</p>
    #[serde(rename = "repeatExtXKey")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_ext_x_key: Option<bool>,
    #[serde(rename = "streamSelection")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_selection: Option<StreamSelection>,
}
/// See [`HlsManifest`](crate::model::HlsManifest)
pub mod hls_manifest {
    use crate::model::{AdMarkers, HlsManifest, StreamSelection};

    /// A builder for [`HlsManifest`](crate::model::HlsManifest)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        ad_markers: Option<AdMarkers>,
        include_iframe_only_stream: Option<bool>,
        manifest_name: Option<String>,
        program_date_time_interval_seconds: Option<i32>,
        repeat_ext_x_key: Option<bool>,
        stream_selection: Option<StreamSelection>,
    }
    impl Builder {
        pub fn ad_markers(mut self, inp: AdMarkers) -> Self {
            self.ad_markers = Some(inp);
            self
        }
        pub fn set_ad_markers(mut self, inp: Option<AdMarkers>) -> Self {
            self.ad_markers = inp;
            self
        }
        pub fn include_iframe_only_stream(mut self, inp: bool) -> Self {
            self.include_iframe_only_stream = Some(inp);
            self
        }
        pub fn set_include_iframe_only_stream(mut self, inp: Option<bool>) -> Self {
            self.include_iframe_only_stream = inp;
            self
        }
        pub fn manifest_name(mut self, inp: impl Into<String>) -> Self {
            self.manifest_name = Some(inp.into());
            self
        }
        pub fn set_manifest_name(mut self, inp: Option<String>) -> Self {
            self.manifest_name = inp;
            self
        }
        pub fn program_date_time_interval_seconds(mut self, inp: i32) -> Self {
            self.program_date_time_interval_seconds = Some(inp);
            self
        }
        pub fn set_program_date_time_interval_seconds(mut self, inp: Option<i32>) -> Self {
            self.program_date_time_interval_seconds = inp;
            self
        }
        pub fn repeat_ext_x_key(mut self, inp: bool) -> Self {
            self.repeat_ext_x_key = Some(inp);
            self
        }
        pub fn set_repeat_ext_x_key(mut self, inp: Option<bool>) -> Self {
            self.repeat_ext_x_key = inp;
            self
        }
        pub fn stream_selection(mut self, inp: StreamSelection) -> Self {
            self.stream_selection = Some(inp);
            self
        }
        pub fn set_stream_selection(mut self, inp: Option<StreamSelection>) -> Self {
            self.stream_selection = inp;
            self
        }
        /// Consumes the builder and constructs a [`HlsManifest`](crate::model::HlsManifest)
        pub fn build(self) -> HlsManifest {
            HlsManifest {
                ad_markers: self.ad_markers,
                include_iframe_only_stream: self.include_iframe_only_stream,
                manifest_name: self.manifest_name,
                program_date_time_interval_seconds: self.program_date_time_interval_seconds,
                repeat_ext_x_key: self.repeat_ext_x_key,
                stream_selection: self.stream_selection,
            }
        }
    }
}
impl HlsManifest {
    /// Creates a new builder-style object to manufacture [`HlsManifest`](crate::model::HlsManifest)
    pub fn builder() -> crate::model::hls_manifest::Builder {
        crate::model::hls_manifest::Builder::default()
    }
}

/// <p>An HTTP Live Streaming (HLS) packaging configuration.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct HlsPackage {
    #[serde(rename = "encryption")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<HlsEncryption>,
    /// <p>A list of HLS manifest configurations.</p>
    #[serde(rename = "hlsManifests")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_manifests: Option<Vec<HlsManifest>>,
    #[serde(rename = "segmentDurationSeconds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_duration_seconds: Option<i32>,
    /// <p>When enabled, audio streams will be placed in rendition groups in the output.</p>
    #[serde(rename = "useAudioRenditionGroup")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_audio_rendition_group: Option<bool>,
}
/// See [`HlsPackage`](crate::model::HlsPackage)
pub mod hls_package {
    use crate::model::{HlsEncryption, HlsManifest, HlsPackage};

    /// A builder for [`HlsPackage`](crate::model::HlsPackage)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        encryption: Option<HlsEncryption>,
        hls_manifests: Option<Vec<HlsManifest>>,
        segment_duration_seconds: Option<i32>,
        use_audio_rendition_group: Option<bool>,
    }
    impl Builder {
        pub fn encryption(mut self, inp: HlsEncryption) -> Self {
            self.encryption = Some(inp);
            self
        }
        pub fn set_encryption(mut self, inp: Option<HlsEncryption>) -> Self {
            self.encryption = inp;
            self
        }
        pub fn hls_manifests(mut self, inp: impl Into<HlsManifest>) -> Self {
            let mut v = self.hls_manifests.unwrap_or_default();
            v.push(inp.into());
            self.hls_manifests = Some(v);
            self
        }
        pub fn set_hls_manifests(mut self, inp: Option<Vec<HlsManifest>>) -> Self {
            self.hls_manifests = inp;
            self
        }
        pub fn segment_duration_seconds(mut self, inp: i32) -> Self {
            self.segment_duration_seconds = Some(inp);
            self
        }
        pub fn set_segment_duration_seconds(mut self, inp: Option<i32>) -> Self {
            self.segment_duration_seconds = inp;
            self
        }
        pub fn use_audio_rendition_group(mut self, inp: bool) -> Self {
            self.use_audio_rendition_group = Some(inp);
            self
        }
        pub fn set_use_audio_rendition_group(mut self, inp: Option<bool>) -> Self {
            self.use_audio_rendition_group = inp;
            self
        }
        /// Consumes the builder and constructs a [`HlsPackage`](crate::model::HlsPackage)
        pub fn build(self) -> HlsPackage {
            HlsPackage {
                encryption: self.encryption,
                hls_manifests: self.hls_manifests,
                segment_duration_seconds: self.segment_duration_seconds,
                use_audio_rendition_group: self.use_audio_rendition_group,
            }
        }
    }
}
impl HlsPackage {
    /// Creates a new builder-style object to manufacture [`HlsPackage`](crate::model::HlsPackage)
    pub fn builder() -> crate::model::hls_package::Builder {
        crate::model::hls_package::Builder::default()
    }
}

/// <p>A Microsoft Smooth Streaming (MSS) encryption configuration.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct MssEncryption {
    /// <p>A configuration for accessing an external Secure Packager and Encoder Key Exchange (SPEKE)
    /// service that will provide encryption keys.</p>
    #[serde(rename = "spekeKeyProvider")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speke_key_provider: Option<SpekeKeyProvider>,
}
/// See [`MssEncryption`](crate::model::MssEncryption)
pub mod mss_encryption {
    use crate::model::{MssEncryption, SpekeKeyProvider};

    /// A builder for [`MssEncryption`](crate::model::MssEncryption)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        speke_key_provider: Option<SpekeKeyProvider>,
    }
    impl Builder {
        pub fn speke_key_provider(mut self, inp: SpekeKeyProvider) -> Self {
            self.speke_key_provider = Some(inp);
            self
        }
        pub fn set_speke_key_provider(mut self, inp: Option<SpekeKeyProvider>) -> Self {
            self.speke_key_provider = inp;
            self
        }
        /// Consumes the builder and constructs a [`MssEncryption`](crate::model::MssEncryption)
        pub fn build(self) -> MssEncryption {
            MssEncryption {
                speke_key_provider: self.speke_key_provider,
            }
        }
    }
}
impl MssEncryption {
    /// Creates a new builder-style object to manufacture [`MssEncryption`](crate::model::MssEncryption)
    pub fn builder() -> crate::model::mss_encryption::Builder {
        crate::model::mss_encryption::Builder::default()
    }
}

/// <p>A Microsoft Smooth Streaming (MSS) manifest configuration.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct MssManifest {
    /// <p>An optional string to include in the name of the manifest.</p>
    #[serde(rename = "manifestName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_name: Option<String>,
    #[serde(rename = "streamSelection")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_selection: Option<StreamSelection>,
}
/// See [`MssManifest`](crate::model::MssManifest)
pub mod mss_manifest {
    use crate::model::{MssManifest, StreamSelection};

    /// A builder for [`MssManifest`](crate::model::MssManifest)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        manifest_name: Option<String>,
        stream_selection: Option<StreamSelection>,
    }
    impl Builder {
        pub fn manifest_name(mut self, inp: impl Into<String>) -> Self {
            self.manifest_name = Some(inp.into());
            self
        }
        pub fn set_manifest_name(mut self, inp: Option<String>) -> Self {
            self.manifest_name = inp;
            self
        }
        pub fn stream_selection(mut self, inp: StreamSelection) -> Self {
            self.stream_selection = Some(inp);
            self
        }
        pub fn set_stream_selection(mut self, inp: Option<StreamSelection>) -> Self {
            self.stream_selection = inp;
            self
        }
        /// Consumes the builder and constructs a [`MssManifest`](crate::model::MssManifest)
        pub fn build(self) -> MssManifest {
            MssManifest {
                manifest_name: self.manifest_name,
                stream_selection: self.stream_selection,
            }
        }
    }
}
impl MssManifest {
    /// Creates a new builder-style object to manufacture [`MssManifest`](crate::model::MssManifest)
    pub fn builder() -> crate::model::mss_manifest::Builder {
        crate::model::mss_manifest::Builder::default()
    }
}

/// <p>A Microsoft Smooth Streaming (MSS) PackagingConfiguration.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct MssPackage {
    #[serde(rename = "encryption")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<MssEncryption>,
    /// <p>A list of MSS manifest configurations.</p>
    #[serde(rename = "mssManifests")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mss_manifests: Option<Vec<MssManifest>>,
    #[serde(rename = "segmentDurationSeconds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_duration_seconds: Option<i32>,
}
/// See [`MssPackage`](crate::model::MssPackage)
pub mod mss_package {
    use crate::model::{MssEncryption, MssManifest, MssPackage};

    /// A builder for [`MssPackage`](crate::model::MssPackage)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        encryption: Option<MssEncryption>,
        mss_manifests: Option<Vec<MssManifest>>,
        segment_duration_seconds: Option<i32>,
    }
    impl Builder {
        pub fn encryption(mut self, inp: MssEncryption) -> Self {
            self.encryption = Some(inp);
            self
        }
        pub fn set_encryption(mut self, inp: Option<MssEncryption>) -> Self {
            self.encryption = inp;
            self
        }
        pub fn mss_manifests(mut self, inp: impl Into<MssManifest>) -> Self {
            let mut v = self.mss_manifests.unwrap_or_default();
            v.push(inp.into());
            self.mss_manifests = Some(v);
            self
        }
        pub fn set_mss_manifests(mut self, inp: Option<Vec<MssManifest>>) -> Self {
            self.mss_manifests = inp;
            self
        }
        pub fn segment_duration_seconds(mut self, inp: i32) -> Self {
            self.segment_duration_seconds = Some(inp);
            self
        }
        pub fn set_segment_duration_seconds(mut self, inp: Option<i32>) -> Self {
            self.segment_duration_seconds = inp;
            self
        }
        /// Consumes the builder and constructs a [`MssPackage`](crate::model::MssPackage)
        pub fn build(self) -> MssPackage {
            MssPackage {
                encryption: self.encryption,
                mss_manifests: self.mss_manifests,
                segment_duration_seconds: self.segment_duration_seconds,
            }
        }
    }
}
impl MssPackage {
    /// Creates a new builder-style object to manufacture [`MssPackage`](crate::model::MssPackage)
    pub fn builder() -> crate::model::mss_package::Builder {
        crate::model::mss_package::Builder::default()
    }
}

/// <p>A MediaPackage VOD PackagingConfiguration resource.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct PackagingConfiguration {
    /// <p>The ARN of the PackagingConfiguration.</p>
    #[serde(rename = "arn")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(rename = "cmafPackage")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmaf_package: Option<CmafPackage>,
    #[serde(rename = "dashPackage")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_package: Option<DashPackage>,
    #[serde(rename = "hlsPackage")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_package: Option<HlsPackage>,
    /// <p>The ID of the PackagingConfiguration.</p>
    #[serde(rename = "id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "mssPackage")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mss_package: Option<MssPackage>,
    /// <p>The ID of a PackagingGroup.</p>
    #[serde(rename = "packagingGroupId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_group_id: Option<String>,
    /// <p>A collection of tags associated with a resource</p>
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}
/// See [`PackagingConfiguration`](crate::model::PackagingConfiguration)
pub mod packaging_configuration {
    use crate::model::{CmafPackage, DashPackage, HlsPackage, MssPackage, PackagingConfiguration};
    use std::collections::HashMap;

    /// A builder for [`PackagingConfiguration`](crate::model::PackagingConfiguration)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        arn: Option<String>,
        cmaf_package: Option<CmafPackage>,
        dash_package: Option<DashPackage>,
        hls_package: Option<HlsPackage>,
        id: Option<String>,
        mss_package: Option<MssPackage>,
        packaging_group_id: Option<String>,
        tags: Option<HashMap<String, String>>,
    }
    impl Builder {
        pub fn arn(mut self, inp: impl Into<String>) -> Self {
            self.arn = Some(inp.into());
            self
        }
        pub fn set_arn(mut self, inp: Option<String>) -> Self {
            self.arn = inp;
            self
        }
        pub fn cmaf_package(mut self, inp: CmafPackage) -> Self {
            self.cmaf_package = Some(inp);
            self
        }
        pub fn set_cmaf_package(mut self, inp: Option<CmafPackage>) -> Self {
            self.cmaf_package = inp;
            self
        }
        pub fn dash_package(mut self, inp: DashPackage) -> Self {
            self.dash_package = Some(inp);
            self
        }
        pub fn set_dash_package(mut self, inp: Option<DashPackage>) -> Self {
            self.dash_package = inp;
            self
        }
        pub fn hls_package(mut self, inp: HlsPackage) -> Self {
            self.hls_package = Some(inp);
            self
        }
        pub fn set_hls_package(mut self, inp: Option<HlsPackage>) -> Self {
            self.hls_package = inp;
            self
        }
        pub fn id(mut self, inp: impl Into<String>) -> Self {
            self.id = Some(inp.into());
            self
        }
        pub fn set_id(mut self, inp: Option<String>) -> Self {
            self.id = inp;
            self
        }
        pub fn mss_package(mut self, inp: MssPackage) -> Self {
            self.mss_package = Some(inp);
            self
        }
        pub fn set_mss_package(mut self, inp: Option<MssPackage>) -> Self {
            self.mss_package = inp;
            self
        }
        pub fn packaging_group_id(mut self, inp: impl Into<String>) -> Self {
            self.packaging_group_id = Some(inp.into());
            self
        }
        pub fn set_packaging_group_id(mut self, inp: Option<String>) -> Self {
            self.packaging_group_id = inp;
            self
        }
        pub fn tags(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.tags = inp;
            self
        }
        /// Consumes the builder and constructs a [`PackagingConfiguration`](crate::model::PackagingConfiguration)
        pub fn build(self) -> PackagingConfiguration {
            PackagingConfiguration {
                arn: self.arn,
                cmaf_package: self.cmaf_package,
                dash_package: self.dash_package,
                hls_package: self.hls_package,
                id: self.id,
                mss_package: self.mss_package,
                packaging_group_id: self.packaging_group_id,
                tags: self.tags,
            }
        }
    }
}
impl PackagingConfiguration {
    /// Creates a new builder-style object to manufacture [`PackagingConfiguration`](crate::model::PackagingConfiguration)
    pub fn builder() -> crate::model::packaging_configuration::Builder {
        crate::model::packaging_configuration::Builder::default()
    }
}

/// <p>A configuration for accessing an external Secure Packager and Encoder Key Exchange (SPEKE)
/// service that will provide encryption keys.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct SpekeKeyProvider {
    /// <p>An Amazon Resource Name (ARN) of an IAM role that AWS Elemental MediaPackage will assume
    /// when accessing the key provider service.</p>
    #[serde(rename = "roleArn")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// <p>The system IDs to include in key requests.</p>
    #[serde(rename = "systemIds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_ids: Option<Vec<String>>,
    /// <p>The URL of the external key provider service.</p>
    #[serde(rename = "url")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
/// See [`SpekeKeyProvider`](crate::model::SpekeKeyProvider)
pub mod speke_key_provider {
    use crate::model::SpekeKeyProvider;

    /// A builder for [`SpekeKeyProvider`](crate::model::SpekeKeyProvider)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        role_arn: Option<String>,
        system_ids: Option<Vec<String>>,
        url: Option<String>,
    }
    impl Builder {
        pub fn role_arn(mut self, inp: impl Into<String>) -> Self {
            self.role_arn = Some(inp.into());
            self
        }
        pub fn set_role_arn(mut self, inp: Option<String>) -> Self {
            self.role_arn = inp;
            self
        }
        pub fn system_ids(mut self, inp: impl Into<String>) -> Self {
            let mut v = self.system_ids.unwrap_or_default();
            v.push(inp.into());
            self.system_ids = Some(v);
            self
        }
        pub fn set_system_ids(mut self, inp: Option<Vec<String>>) -> Self {
            self.system_ids = inp;
            self
        }
        pub fn url(mut self, inp: impl Into<String>) -> Self {
            self.url = Some(inp.into());
            self
        }
        pub fn set_url(mut self, inp: Option<String>) -> Self {
            self.url = inp;
            self
        }
        /// Consumes the builder and constructs a [`SpekeKeyProvider`](crate::model::SpekeKeyProvider)
        pub fn build(self) -> SpekeKeyProvider {
            SpekeKeyProvider {
                role_arn: self.role_arn,
                system_ids: self.system_ids,
                url: self.url,
            }
        }
    }
}
impl SpekeKeyProvider {
    /// Creates a new builder-style object to manufacture [`SpekeKeyProvider`](crate::model::SpekeKeyProvider)
    pub fn builder() -> crate::model::speke_key_provider::Builder {
        crate::model::speke_key_provider::Builder::default()
    }
}

/// <p>A StreamSelection configuration.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct StreamSelection {
    /// <p>The maximum video bitrate (bps) to include in output.</p>
    #[serde(rename = "maxVideoBitsPerSecond")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_video_bits_per_second: Option<i32>,
    /// <p>The minimum video bitrate (bps) to include in output.</p>
    #[serde(rename = "minVideoBitsPerSecond")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_video_bits_per_second: Option<i32>,
    /// <p>A directive that determines the order of streams in the output.</p>
    #[serde(rename = "streamOrder")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_order: Option<StreamOrder>,
}
/// See [`StreamSelection`](crate::model::StreamSelection)
pub mod stream_selection {
    use crate::model::{StreamOrder, StreamSelection};

    /// A builder for [`StreamSelection`](crate::model::StreamSelection)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        max_video_bits_per_second: Option<i32>,
        min_video_bits_per_second: Option<i32>,
        stream_order: Option<StreamOrder>,
    }
    impl Builder {
        pub fn max_video_bits_per_second(mut self, inp: i32) -> Self {
            self.max_video_bits_per_second = Some(inp);
            self
        }
        pub fn set_max_video_bits_per_second(mut self, inp: Option<i32>) -> Self {
            self.max_video_bits_per_second = inp;
            self
        }
        pub fn min_video_bits_per_second(mut self, inp: i32) -> Self {
            self.min_video_bits_per_second = Some(inp);
            self
        }
        pub fn set_min_video_bits_per_second(mut self, inp: Option<i32>) -> Self {
            self.min_video_bits_per_second = inp;
            self
        }
        pub fn stream_order(mut self, inp: StreamOrder) -> Self {
            self.stream_order = Some(inp);
            self
        }
        pub fn set_stream_order(mut self, inp: Option<StreamOrder>) -> Self {
            self.stream_order = inp;
            self
        }
        /// Consumes the builder and constructs a [`StreamSelection`](crate::model::StreamSelection)
        pub fn build(self) -> StreamSelection {
            StreamSelection {
                max_video_bits_per_second: self.max_video_bits_per_second,
                min_video_bits_per_second: self.min_video_bits_per_second,
                stream_order: self.stream_order,
            }
        }
    }
}
impl StreamSelection {
    /// Creates a new builder-style object to manufacture [`StreamSelection`](crate::model::StreamSelection)
    pub fn builder() -> crate::model::stream_selection::Builder {
        crate::model::stream_selection::Builder::default()
    }
}

#[cfg(test)]
mod test {
    use crate::model::{
        AdMarkers, DashManifest, DashPackage, HlsManifest, HlsPackage, PackagingConfiguration,
        PeriodTriggersElement, Profile, SegmentTemplateFormat, StreamOrder, StreamSelection,
    };

    #[test]
    fn hls_package() {
        let package = HlsPackage::builder()
            .hls_manifests(
                HlsManifest::builder()
                    .ad_markers(AdMarkers::Scte35Enhanced)
                    .manifest_name("index")
                    .stream_selection(
                        StreamSelection::builder()
                            .stream_order(StreamOrder::VideoBitrateDescending)
                            .build(),
                    )
                    .build(),
            )
            .segment_duration_seconds(6)
            .build();
        assert_eq!(
            serde_json::to_value(&package).unwrap(),
            serde_json::json!({
                "hlsManifests": [{
                    "adMarkers": "SCTE35_ENHANCED",
                    "manifestName": "index",
                    "streamSelection": {"streamOrder": "VIDEO_BITRATE_DESCENDING"}
                }],
                "segmentDurationSeconds": 6
            })
        );
    }

    #[test]
    fn packaging_configuration() {
        let config: PackagingConfiguration = serde_json::from_str(
            r#"{
                "arn": "arn:aws:mediapackage-vod:us-west-2:123456789012:packaging-configurations/dash",
                "id": "dash",
                "packagingGroupId": "vod-group",
                "dashPackage": {
                    "dashManifests": [{"manifestLayout": "COMPACT", "profile": "HBBTV_1_5", "minBufferTimeSeconds": 30}],
                    "periodTriggers": ["ADS"],
                    "segmentDurationSeconds": 2,
                    "segmentTemplateFormat": "NUMBER_WITH_TIMELINE"
                },
                "tags": {"team": "video"}
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.dash_package,
            Some(
                DashPackage::builder()
                    .dash_manifests(
                        DashManifest::builder()
                            .manifest_layout("COMPACT".into())
                            .profile(Profile::Hbbtv15)
                            .min_buffer_time_seconds(30)
                            .build()
                    )
                    .period_triggers(PeriodTriggersElement::Ads)
                    .segment_duration_seconds(2)
                    .segment_template_format(SegmentTemplateFormat::NumberWithTimeline)
                    .build()
            )
        );
        assert_eq!(config.hls_package, None);
        assert_eq!(
            config.tags.unwrap().get("team").map(String::as_str),
            Some("video")
        );
    }

    #[test]
    fn unknown_enum_values_are_preserved() {
        let markers: AdMarkers = serde_json::from_str(r#""SCTE35_DAI""#).unwrap();
        assert_eq!(markers, AdMarkers::Unknown("SCTE35_DAI".to_string()));
        assert_eq!(serde_json::to_string(&markers).unwrap(), r#""SCTE35_DAI""#);
        assert_eq!(
            AdMarkers::values(),
            &["NONE", "PASSTHROUGH", "SCTE35_ENHANCED"]
        );
        assert_eq!("NONE".parse::<Profile>().unwrap(), Profile::None);
    }
}
