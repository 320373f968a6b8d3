//! Demo fixtures: a Turkish sample report and the engine responses it is
//! expected to produce. Used by `WorkbenchSession::load_sample` and by the
//! end-to-end tests.

use crate::models::{
    Demographic, Diagnosis, Doctor, Facility, HealthReportRequest, MedicationInformation, Notes,
    OverallResult, Patient, ReportInformation, SutEvaluation, SutMedication, Usage, Verdict,
};

/// Management console where missing active ingredients get added, linked from
/// "Bulunamadı" verdicts.
pub const SUT_MANAGEMENT_URL: &str = "https://hunerai.com/admin/sut-management";

pub const SAMPLE_MEDICAL_REPORT: &str = "
HASTA RAPORU

Rapor No: 2024-MR-789456
Protokol No: PRK-2024-123
Rapor Tarihi: 15/03/2024
Rapor Türü: İlaç Kullanım Raporu

SAĞLIK TESİSİ BİLGİLERİ
Kurum Kodu: 11068743
Kurum Adı: İstanbul Üniversitesi Tıp Fakültesi Hastanesi

HASTA BİLGİLERİ
Cinsiyet: Erkek
Doğum Tarihi: 22/05/1978

TANILAR
1. Gastroözofageal Reflü Hastalığı (K21.9)
   Başlangıç: 10/01/2024
   Tanı açıklaması: Kronik GÖRH tanısı ile takipli hasta

2. Hipertansiyon (I10) - Esansiyel (primer) hipertansiyon
   Başlangıç: 05/03/2018

3. Tip 2 Diabetes Mellitus (E11.9)
   Başlangıç: 01/06/2022

REÇETE EDİLEN İLAÇLAR
1. Esomeprazol 40 mg Tablet
   SGK Kodu: SGKEZY
   Form: Oral tablet
   Doz: 40 mg
   Kullanım: Günde 1 kez
   Ekleme Tarihi: 15/03/2024 09:30

2. Valsartan/Amlodipin 160/10 mg Tablet
   SGK Kodu: SGKG72
   Form: Oral tablet
   Doz: 160/10 mg
   Kullanım: Günde 1 kez
   Ekleme Tarihi: 15/03/2024 09:35

3. Tirzepatid 5 mg Enjeksiyon
   SGK Kodu: SGKTRZ
   Form: Subkutan enjeksiyon
   Doz: 5 mg
   Kullanım: Haftada 1 kez
   Ekleme Tarihi: 15/03/2024 09:40

HEKİM BİLGİLERİ
Dr. Mehmet Yıldırım
Uzmanlık: İç Hastalıkları
Diploma No: 34567
Sicil No: TR-ICH-2012-045

KLİNİK ÖZET
Hasta kronik GÖRH, hipertansiyon ve Tip 2 DM tanıları ile takip edilmektedir. \
Mevcut tedavi ile semptomlar kontrol altındadır.
";

/// The structured report the jsonize stage extracts from
/// [`SAMPLE_MEDICAL_REPORT`].
pub fn sample_extracted_report() -> HealthReportRequest {
    HealthReportRequest {
        title: "Huner Engine Medical Report Extractor v1.0".to_string(),
        report_information: ReportInformation {
            report_no: "2024-MR-789456".to_string(),
            report_date: "15/03/2024".to_string(),
            protocol_no: "PRK-2024-123".to_string(),
            report_type: "İlaç Kullanım Raporu".to_string(),
            facility: Facility {
                code: "11068743".to_string(),
                title: "İstanbul Üniversitesi Tıp Fakültesi Hastanesi".to_string(),
            },
        },
        patient: Patient {
            demographic: Demographic {
                gender: "Erkek".to_string(),
                date_of_birth: "22/05/1978".to_string(),
                age: 45,
            },
            diagnoses: vec![
                Diagnosis {
                    code: "K21.9".to_string(),
                    title: "Gastroözofageal reflü hastalığı".to_string(),
                    description: "Kronik GÖRH tanısı ile takipli hasta".to_string(),
                    start_date: "10/01/2024".to_string(),
                    ..Default::default()
                },
                Diagnosis {
                    code: "I10".to_string(),
                    title: "Esansiyel (primer) hipertansiyon".to_string(),
                    start_date: "05/03/2018".to_string(),
                    ..Default::default()
                },
                Diagnosis {
                    code: "E11.9".to_string(),
                    title: "Tip 2 diabetes mellitus".to_string(),
                    start_date: "01/06/2022".to_string(),
                    ..Default::default()
                },
            ],
        },
        medication_information: vec![
            MedicationInformation {
                active_ingredient: "Esomeprazol".to_string(),
                sgk_code: "SGKEZY".to_string(),
                form: "Oral tablet".to_string(),
                dose: "40 mg".to_string(),
                usage: Usage {
                    frequency: "Günde 1 kez".to_string(),
                    amount: "1 tablet".to_string(),
                },
                added_time: "15/03/2024 09:30".to_string(),
                ..Default::default()
            },
            MedicationInformation {
                active_ingredient: "Valsartan/Amlodipin".to_string(),
                sgk_code: "SGKG72".to_string(),
                form: "Oral tablet".to_string(),
                dose: "160/10 mg".to_string(),
                usage: Usage {
                    frequency: "Günde 1 kez".to_string(),
                    amount: "1 tablet".to_string(),
                },
                added_time: "15/03/2024 09:35".to_string(),
                ..Default::default()
            },
            MedicationInformation {
                active_ingredient: "Tirzepatid".to_string(),
                sgk_code: "SGKTRZ".to_string(),
                form: "Subkutan enjeksiyon".to_string(),
                dose: "5 mg".to_string(),
                usage: Usage {
                    frequency: "Haftada 1 kez".to_string(),
                    amount: "1 enjeksiyon".to_string(),
                },
                added_time: "15/03/2024 09:40".to_string(),
                ..Default::default()
            },
        ],
        doctors: vec![Doctor {
            full_name: "Dr. Mehmet Yıldırım".to_string(),
            specialty: "İç Hastalıkları".to_string(),
            diploma_no: "34567".to_string(),
            registration_no: "TR-ICH-2012-045".to_string(),
        }],
        findings: Vec::new(),
        notes: Notes {
            clinical_summary: "Hasta kronik GÖRH, hipertansiyon ve Tip 2 DM tanıları ile takip \
                               edilmektedir. Mevcut tedavi ile semptomlar kontrol altındadır."
                .to_string(),
            ..Default::default()
        },
    }
}

/// The compliance evaluation the analyze stage returns for the sample report.
/// Covers all three verdicts, including "Bulunamadı" with its add-ingredient
/// guidance.
pub fn sample_evaluation() -> SutEvaluation {
    SutEvaluation {
        medications: vec![
            SutMedication {
                sgk_code: Some("SGKEZY".to_string()),
                active_ingredient: "Esomeprazol".to_string(),
                brand_name: None,
                result: Verdict::Compliant,
                evaluation: "İlaç, EK-4/D listesinde yer almayan hastalıklar (20.00) tanı kodu \
                             ile verilmiştir. Tanı (K21.9) ve uzmanlık branşı (İç Hastalıkları) \
                             uygundur."
                    .to_string(),
                sut_reference: Some("EK-4/D - Bedeli Ödenecek İlaçlar Listesi".to_string()),
                diagnosis_code: Some("K21.9".to_string()),
                specialty: Some("İç Hastalıkları".to_string()),
            },
            SutMedication {
                sgk_code: Some("SGKG72".to_string()),
                active_ingredient: "Valsartan/Amlodipin".to_string(),
                brand_name: None,
                result: Verdict::NonCompliant,
                evaluation: "EK-4F Madde 51'e göre, anjiyotensin reseptör blokerlerinin diğer \
                             antihipertansifler ile kombinasyonlarının kullanımında, hastanın \
                             monoterapi ile kan basıncının yeterli oranda kontrol altına \
                             alınamadığının raporda belirtilmesi zorunludur."
                    .to_string(),
                sut_reference: Some("EK-4F Madde 51 - Antihipertansif Kombinasyonlar".to_string()),
                diagnosis_code: Some("I10".to_string()),
                specialty: Some("İç Hastalıkları".to_string()),
            },
            SutMedication {
                sgk_code: None,
                active_ingredient: "Tirzepatid".to_string(),
                brand_name: None,
                result: Verdict::NotFound,
                evaluation: "Bu etken madde SUT veritabanında bulunamadı. Lütfen etken maddeyi \
                             sisteme ekleyin."
                    .to_string(),
                sut_reference: None,
                diagnosis_code: Some("E11.9".to_string()),
                specialty: Some("İç Hastalıkları".to_string()),
            },
        ],
        overall_result: OverallResult::NonCompliant,
        summary: "Reçetedeki ilaçlardan biri SUT kriterlerini karşılamamaktadır ve bir etken \
                  madde sistemde bulunamadı. Eksik etken maddeler için SUT yönetim panelinden \
                  ekleme yapılması gerekmektedir."
            .to_string(),
        timestamp: None,
    }
}
